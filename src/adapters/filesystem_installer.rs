//! Filesystem-backed artifact installer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use super::layouts::layout_for;
use crate::domain::{AppError, Artifact, TargetRepository};
use crate::ports::ArtifactInstaller;

/// Copies artifact files into a local repository directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemArtifactInstaller;

impl FilesystemArtifactInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactInstaller for FilesystemArtifactInstaller {
    fn install(
        &self,
        file: &Path,
        artifact: &Artifact,
        repository: &TargetRepository,
    ) -> Result<PathBuf, AppError> {
        let failed = |reason: String| AppError::Installation {
            artifact: artifact.coordinates.to_string(),
            reason,
        };

        if !file.is_file() {
            return Err(failed(format!("artifact file not found: {}", file.display())));
        }

        let relative = layout_for(repository.layout).path_of(&artifact.coordinates);
        let destination = repository.resolve(&relative);

        let unchanged = destination.is_file()
            && same_content(file, &destination).map_err(|e| failed(e.to_string()))?;
        if unchanged {
            debug!(artifact = %artifact.coordinates, "already installed");
            return Ok(destination);
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| failed(format!("cannot create {}: {}", parent.display(), e)))?;
        }
        fs::copy(file, &destination)
            .map_err(|e| failed(format!("cannot copy to {}: {}", destination.display(), e)))?;

        debug!(artifact = %artifact.coordinates, path = %destination.display(), "installed");
        Ok(destination)
    }
}

fn same_content(a: &Path, b: &Path) -> io::Result<bool> {
    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }
    Ok(digest(a)? == digest(b)?)
}

fn digest(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize().to_vec())
}
