use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact, ArtifactCoordinates, TargetRepository};
use crate::ports::ArtifactInstaller;

/// Installer that records requests instead of copying files.
#[derive(Default)]
pub struct RecordingInstaller {
    installed: RefCell<Vec<(ArtifactCoordinates, TargetRepository)>>,
    fail_on: Option<String>,
}

impl RecordingInstaller {
    /// Fail when asked to install the artifact with this id.
    pub fn failing_on(artifact_id: &str) -> Self {
        Self { fail_on: Some(artifact_id.to_string()), ..Self::default() }
    }

    pub fn installed(&self) -> Vec<(ArtifactCoordinates, TargetRepository)> {
        self.installed.borrow().clone()
    }
}

impl ArtifactInstaller for RecordingInstaller {
    fn install(
        &self,
        _file: &Path,
        artifact: &Artifact,
        repository: &TargetRepository,
    ) -> Result<PathBuf, AppError> {
        if self.fail_on.as_deref() == Some(artifact.coordinates.artifact_id.as_str()) {
            return Err(AppError::Io(std::io::Error::other("mock install failure")));
        }
        self.installed.borrow_mut().push((artifact.coordinates.clone(), repository.clone()));
        Ok(repository.root.join(artifact.coordinates.file_name()))
    }
}
