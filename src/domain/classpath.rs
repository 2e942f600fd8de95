//! Classpath composition for a program.

use std::collections::BTreeSet;

use super::{Artifact, ArtifactCoordinates, CONFIGURATION_DIRECTORY, ClasspathEntry};
use crate::ports::RepositoryLayout;

/// Build the ordered classpath for a program.
///
/// The configuration directory comes first when requested, followed by every
/// distinct artifact (the runtime artifacts plus the project artifact) sorted
/// by coordinates, so output is identical across runs.
pub fn assemble_classpath<L: RepositoryLayout + ?Sized>(
    artifacts: &[Artifact],
    project_artifact: &Artifact,
    include_configuration_directory: bool,
    layout: &L,
) -> Vec<ClasspathEntry> {
    let distinct: BTreeSet<&ArtifactCoordinates> = artifacts
        .iter()
        .chain(std::iter::once(project_artifact))
        .map(|artifact| &artifact.coordinates)
        .collect();

    let mut classpath = Vec::with_capacity(distinct.len() + 1);

    if include_configuration_directory {
        classpath.push(ClasspathEntry::directory(CONFIGURATION_DIRECTORY));
    }

    classpath.extend(distinct.into_iter().map(|coordinates| ClasspathEntry::Dependency {
        group_id: coordinates.group_id.clone(),
        artifact_id: coordinates.artifact_id.clone(),
        version: coordinates.version.clone(),
        relative_path: layout.path_of(coordinates),
    }));

    classpath
}
