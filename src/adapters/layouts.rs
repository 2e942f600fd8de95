//! Built-in repository layouts.

use crate::domain::{ArtifactCoordinates, LayoutKind};
use crate::ports::RepositoryLayout;

/// Maven 2 layout: `g/r/o/u/p/artifactId/version/file`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRepositoryLayout;

impl RepositoryLayout for DefaultRepositoryLayout {
    fn name(&self) -> &'static str {
        LayoutKind::Default.as_str()
    }

    fn path_of(&self, coordinates: &ArtifactCoordinates) -> String {
        format!(
            "{}/{}/{}/{}",
            coordinates.group_id.replace('.', "/"),
            coordinates.artifact_id,
            coordinates.version,
            coordinates.file_name()
        )
    }
}

/// Maven 1 layout: `groupId/<extension>s/file`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyRepositoryLayout;

impl RepositoryLayout for LegacyRepositoryLayout {
    fn name(&self) -> &'static str {
        LayoutKind::Legacy.as_str()
    }

    fn path_of(&self, coordinates: &ArtifactCoordinates) -> String {
        format!("{}/{}s/{}", coordinates.group_id, coordinates.extension, coordinates.file_name())
    }
}

/// Layout implementation for a configured layout kind.
pub fn layout_for(kind: LayoutKind) -> &'static dyn RepositoryLayout {
    match kind {
        LayoutKind::Default => &DefaultRepositoryLayout,
        LayoutKind::Legacy => &LegacyRepositoryLayout,
    }
}
