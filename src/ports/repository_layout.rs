use crate::domain::ArtifactCoordinates;

/// Port computing where an artifact lives inside a repository.
pub trait RepositoryLayout {
    /// Layout name as configured (`default`, `legacy`).
    fn name(&self) -> &'static str;

    /// Repository-relative path of an artifact, using `/` separators.
    fn path_of(&self, coordinates: &ArtifactCoordinates) -> String;
}
