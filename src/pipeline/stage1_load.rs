use std::path::Path;

use crate::input::{InputError, MetricsDocument, ensure_aligned, load_metrics};

#[derive(Debug)]
pub struct Stage1Output {
    pub with_vectors: MetricsDocument,
    pub without_vectors: MetricsDocument,
}

pub fn run_stage1(with_path: &Path, without_path: &Path) -> Result<Stage1Output, InputError> {
    // Both paths are checked up front so a missing second file is reported
    // before the first one is parsed.
    for path in [with_path, without_path] {
        if !path.is_file() {
            return Err(InputError::FileNotFound(path.to_path_buf()));
        }
    }

    let with_vectors = load_metrics(with_path)?;
    let without_vectors = load_metrics(without_path)?;
    ensure_aligned(&with_vectors, &without_vectors)?;

    tracing::debug!(
        "loaded {} datasets from {} and {}",
        with_vectors.len(),
        with_path.display(),
        without_path.display()
    );

    Ok(Stage1Output {
        with_vectors,
        without_vectors,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
