use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod metrics;

pub use metrics::MetricsDocument;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected metrics layout in {}: {reason}", path.display())]
    Schema { path: PathBuf, reason: String },
    #[error("metrics files describe different datasets: {detail}")]
    DatasetMismatch { detail: String },
}

impl InputError {
    pub(crate) fn schema(path: &Path, reason: impl Into<String>) -> Self {
        InputError::Schema {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

pub fn load_metrics(path: &Path) -> Result<MetricsDocument, InputError> {
    if !path.is_file() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    MetricsDocument::from_value(path, value)
}

/// Both documents must list the same datasets in the same order, since bars
/// are paired by position on the shared x axis.
pub fn ensure_aligned(a: &MetricsDocument, b: &MetricsDocument) -> Result<(), InputError> {
    let names_a: Vec<&str> = a.dataset_names().collect();
    let names_b: Vec<&str> = b.dataset_names().collect();
    if names_a == names_b {
        return Ok(());
    }

    let detail = match names_a
        .iter()
        .zip(names_b.iter())
        .position(|(x, y)| x != y)
    {
        Some(idx) => format!(
            "position {} is `{}` in {} but `{}` in {}",
            idx,
            names_a[idx],
            a.source().display(),
            names_b[idx],
            b.source().display()
        ),
        None => format!(
            "{} has {} datasets but {} has {}",
            a.source().display(),
            names_a.len(),
            b.source().display(),
            names_b.len()
        ),
    };
    Err(InputError::DatasetMismatch { detail })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
