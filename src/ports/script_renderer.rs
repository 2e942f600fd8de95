//! Launcher script rendering port.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Daemon, Platform};

/// Port for turning a daemon into a launcher script on disk.
pub trait ScriptRenderer {
    /// Render the launcher for `platform` under `target_directory`.
    ///
    /// Returns the path of the written script.
    fn render(
        &self,
        platform: Platform,
        daemon: &Daemon,
        target_directory: &Path,
    ) -> Result<PathBuf, AppError>;
}
