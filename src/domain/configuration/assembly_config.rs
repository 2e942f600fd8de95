//! Assembly descriptor model (`appasm.toml` or `appasm.yml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, Artifact, Program};

/// Default assembly directory, relative to the descriptor.
pub const DEFAULT_ASSEMBLE_DIRECTORY: &str = "target/appassembler";

/// Everything one assembly run needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssemblyConfig {
    /// Directory the repository and launcher scripts are assembled into.
    #[serde(default = "default_assemble_directory")]
    pub assemble_directory: PathBuf,
    /// Repository layout name (`default` or `legacy`).
    #[serde(default)]
    pub repository_layout: Option<String>,
    /// Put `etc/` at the head of every classpath.
    #[serde(default = "default_true")]
    pub include_configuration_directory_in_classpath: bool,
    /// Extra JVM arguments, as one free-form string.
    #[serde(default)]
    pub extra_jvm_arguments: Option<String>,
    /// Run-wide default platforms.
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    /// Prefix for generated launcher file names.
    #[serde(default)]
    pub bin_prefix: Option<String>,
    /// The project's own artifact.
    pub project: Artifact,
    /// Resolved runtime artifacts.
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    /// Programs to generate launchers for.
    #[serde(default)]
    pub programs: Vec<Program>,
}

fn default_assemble_directory() -> PathBuf {
    PathBuf::from(DEFAULT_ASSEMBLE_DIRECTORY)
}

fn default_true() -> bool {
    true
}

impl AssemblyConfig {
    /// Minimal configuration for a project artifact, with defaults elsewhere.
    pub fn new(project: Artifact) -> Self {
        Self {
            assemble_directory: default_assemble_directory(),
            repository_layout: None,
            include_configuration_directory_in_classpath: true,
            extra_jvm_arguments: None,
            platforms: None,
            bin_prefix: None,
            project,
            artifacts: Vec::new(),
            programs: Vec::new(),
        }
    }

    /// Parse TOML descriptor content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|e| AppError::ParseError {
            what: "assembly descriptor (TOML)".into(),
            details: e.to_string(),
        })
    }

    /// Parse YAML descriptor content.
    pub fn parse_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::ParseError {
            what: "assembly descriptor (YAML)".into(),
            details: e.to_string(),
        })
    }

    /// Resolve relative paths against the directory holding the descriptor.
    pub fn rebase(mut self, base: &Path) -> Self {
        self.assemble_directory = rebase_path(base, &self.assemble_directory);
        self.project.file = rebase_path(base, &self.project.file);
        for artifact in &mut self.artifacts {
            artifact.file = rebase_path(base, &artifact.file);
        }
        self
    }
}

fn rebase_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
