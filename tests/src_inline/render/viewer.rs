use std::ffi::OsStr;

use super::*;

#[test]
fn test_viewer_command_uses_given_program() {
    let cmd = viewer_command(Some(Path::new("feh")), Path::new("/tmp/out.png"));
    assert_eq!(cmd.get_program(), OsStr::new("feh"));
    let args: Vec<&OsStr> = cmd.get_args().collect();
    assert_eq!(args, vec![OsStr::new("/tmp/out.png")]);
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn test_viewer_command_defaults_to_xdg_open() {
    let cmd = viewer_command(None, Path::new("out.png"));
    assert_eq!(cmd.get_program(), OsStr::new("xdg-open"));
    assert_eq!(cmd.get_args().last(), Some(OsStr::new("out.png")));
}

#[test]
fn test_open_in_viewer_missing_program() {
    let program = Path::new("/nonexistent/embedplot-viewer");
    let err = open_in_viewer(Path::new("out.png"), Some(program)).unwrap_err();
    match err {
        RenderError::Viewer { path, .. } => assert_eq!(path, Path::new("out.png")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_open_in_viewer_failing_program() {
    let err = open_in_viewer(Path::new("out.png"), Some(Path::new("false"))).unwrap_err();
    assert!(matches!(err, RenderError::ViewerExit { .. }));
}

#[cfg(unix)]
#[test]
fn test_open_in_viewer_success() {
    open_in_viewer(Path::new("out.png"), Some(Path::new("true"))).unwrap();
}
