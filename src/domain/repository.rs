//! Assembly repository description.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use super::AppError;

/// Identifier of the repository artifacts are installed into.
pub const ASSEMBLY_REPOSITORY_ID: &str = "appassembler";

/// Directory under the assembly root holding installed artifacts.
pub const REPOSITORY_DIR: &str = "repo";

/// Directory under the assembly root holding launcher scripts.
pub const BIN_DIR: &str = "bin";

/// Supported repository layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Maven 2 layout: group path, artifact, version directories.
    #[default]
    Default,
    /// Maven 1 layout: group, then a per-type directory.
    Legacy,
}

impl LayoutKind {
    /// Parse an optional layout name; absent means `default`.
    pub fn parse(name: Option<&str>) -> Result<Self, AppError> {
        name.map_or(Ok(LayoutKind::Default), |n| n.parse())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Default => "default",
            LayoutKind::Legacy => "legacy",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "default" => Ok(LayoutKind::Default),
            "legacy" => Ok(LayoutKind::Legacy),
            other => Err(AppError::config_error(format!("Unknown repository layout '{}'.", other))),
        }
    }
}

/// A freshly described repository that artifacts are installed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRepository {
    pub id: String,
    pub root: PathBuf,
    pub layout: LayoutKind,
}

impl TargetRepository {
    /// Describe the repository living under an assembly directory.
    pub fn under(assemble_directory: &Path, layout: LayoutKind) -> Self {
        Self {
            id: ASSEMBLY_REPOSITORY_ID.to_string(),
            root: assemble_directory.join(REPOSITORY_DIR),
            layout,
        }
    }

    /// Absolute location for a layout-relative path.
    pub fn resolve(&self, relative_path: &str) -> PathBuf {
        relative_path.split('/').fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_layout_is_default() {
        assert_eq!(LayoutKind::parse(None).unwrap(), LayoutKind::Default);
    }

    #[test]
    fn known_layouts_parse() {
        assert_eq!(LayoutKind::parse(Some("default")).unwrap(), LayoutKind::Default);
        assert_eq!(LayoutKind::parse(Some("legacy")).unwrap(), LayoutKind::Legacy);
    }

    #[test]
    fn unknown_layout_is_configuration_error() {
        let err = LayoutKind::parse(Some("flat")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown repository layout 'flat'.");
    }

    #[test]
    fn target_repository_lives_under_repo() {
        let repo = TargetRepository::under(Path::new("/out"), LayoutKind::Default);
        assert_eq!(repo.id, "appassembler");
        assert_eq!(repo.root, PathBuf::from("/out/repo"));
        assert_eq!(repo.resolve("g/a/1/a-1.jar"), PathBuf::from("/out/repo/g/a/1/a-1.jar"));
    }
}
