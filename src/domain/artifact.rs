//! Resolved library artifacts.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_extension() -> String {
    "jar".to_string()
}

/// Identity of an artifact in a repository.
///
/// Ordering follows group, artifact, version, then classifier and extension,
/// which is the order dependencies appear on a generated classpath.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtifactCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl ArtifactCoordinates {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            classifier: None,
            extension: default_extension(),
        }
    }

    /// File name inside a repository: `artifactId-version[-classifier].ext`.
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => {
                format!("{}-{}-{}.{}", self.artifact_id, self.version, classifier, self.extension)
            }
            None => format!("{}-{}.{}", self.artifact_id, self.version, self.extension),
        }
    }
}

impl fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.extension)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

/// A resolved artifact with a physical location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artifact {
    #[serde(flatten)]
    pub coordinates: ArtifactCoordinates,
    /// Location of the artifact file to install.
    pub file: PathBuf,
}

impl Artifact {
    pub fn new(coordinates: ArtifactCoordinates, file: impl Into<PathBuf>) -> Self {
        Self { coordinates, file: file.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_without_classifier() {
        let coords = ArtifactCoordinates::new("org.slf4j", "slf4j-api", "2.0.9");
        assert_eq!(coords.file_name(), "slf4j-api-2.0.9.jar");
    }

    #[test]
    fn file_name_with_classifier() {
        let mut coords = ArtifactCoordinates::new("io.netty", "netty-transport", "4.1.100");
        coords.classifier = Some("linux-x86_64".into());
        assert_eq!(coords.file_name(), "netty-transport-4.1.100-linux-x86_64.jar");
    }

    #[test]
    fn display_uses_colon_notation() {
        let coords = ArtifactCoordinates::new("com.example", "app", "1.0");
        assert_eq!(coords.to_string(), "com.example:app:jar:1.0");
    }

    #[test]
    fn ordering_is_group_then_artifact_then_version() {
        let mut coords = vec![
            ArtifactCoordinates::new("org.b", "x", "1"),
            ArtifactCoordinates::new("org.a", "z", "1"),
            ArtifactCoordinates::new("org.a", "y", "2"),
            ArtifactCoordinates::new("org.a", "y", "1"),
        ];
        coords.sort();
        let keys: Vec<_> = coords
            .iter()
            .map(|c| format!("{}:{}:{}", c.group_id, c.artifact_id, c.version))
            .collect();
        assert_eq!(keys, vec!["org.a:y:1", "org.a:y:2", "org.a:z:1", "org.b:x:1"]);
    }
}
