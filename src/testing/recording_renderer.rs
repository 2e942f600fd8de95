use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Daemon, Platform};
use crate::ports::ScriptRenderer;

/// Renderer that records every successful render call.
#[derive(Default)]
pub struct RecordingRenderer {
    calls: RefCell<Vec<(Platform, Daemon, PathBuf)>>,
    fail_on: Option<Platform>,
}

impl RecordingRenderer {
    /// Fail every render for this platform.
    pub fn failing_on(platform: Platform) -> Self {
        Self { fail_on: Some(platform), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<(Platform, Daemon, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl ScriptRenderer for RecordingRenderer {
    fn render(
        &self,
        platform: Platform,
        daemon: &Daemon,
        target_directory: &Path,
    ) -> Result<PathBuf, AppError> {
        if self.fail_on == Some(platform) {
            return Err(AppError::Template {
                name: platform.to_string(),
                details: "mock render failure".into(),
            });
        }
        self.calls.borrow_mut().push((platform, daemon.clone(), target_directory.to_path_buf()));
        Ok(target_directory.join("bin").join(&daemon.id))
    }
}
