use std::path::Path;
use std::process::{Command, Stdio};

use crate::render::RenderError;

/// Command that opens `path`: `program` when given, otherwise the platform's
/// default opener.
pub fn viewer_command(program: Option<&Path>, path: &Path) -> Command {
    let mut cmd = match program {
        Some(program) => Command::new(program),
        None if cfg!(target_os = "macos") => Command::new("open"),
        None if cfg!(target_os = "windows") => {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]);
            cmd
        }
        None => Command::new("xdg-open"),
    };
    cmd.arg(path);
    cmd
}

/// Hands the rendered image to a viewer and waits for the launcher to
/// return, the way a blocking `show` does.
pub fn open_in_viewer(path: &Path, program: Option<&Path>) -> Result<(), RenderError> {
    let status = viewer_command(program, path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| RenderError::Viewer {
            path: path.to_path_buf(),
            source,
        })?;
    if !status.success() {
        return Err(RenderError::ViewerExit {
            path: path.to_path_buf(),
            status,
        });
    }
    tracing::debug!("opened {} in viewer", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/viewer.rs"]
mod tests;
