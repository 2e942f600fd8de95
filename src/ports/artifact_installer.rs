//! Artifact installation port.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact, TargetRepository};

/// Port for copying artifacts into the assembly repository.
pub trait ArtifactInstaller {
    /// Install `file` as `artifact` into `repository`.
    ///
    /// Installing an artifact that is already present must succeed.
    /// Returns the installed location.
    fn install(
        &self,
        file: &Path,
        artifact: &Artifact,
        repository: &TargetRepository,
    ) -> Result<PathBuf, AppError>;
}
