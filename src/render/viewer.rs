use std::path::Path;
use std::process::Command;

use crate::error::RenderError;

/// Something that can put a saved image on screen.
///
/// Failure is expected on headless systems; callers treat it as
/// non-fatal.
pub trait Viewer {
    /// Opens the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DisplayUnavailable`] if the image cannot be shown.
    fn show(&self, path: &Path) -> Result<(), RenderError>;
}

/// Opens images with the platform's default application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl SystemViewer {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl Viewer for SystemViewer {
    fn show(&self, path: &Path) -> Result<(), RenderError> {
        let status = Self::command(path)
            .status()
            .map_err(|e| RenderError::DisplayUnavailable(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(RenderError::DisplayUnavailable(format!(
                "viewer exited with {status}"
            )))
        }
    }
}

/// Never shows anything. Used when display is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewer;

impl Viewer for NoViewer {
    fn show(&self, _path: &Path) -> Result<(), RenderError> {
        Err(RenderError::DisplayUnavailable("display disabled".into()))
    }
}
