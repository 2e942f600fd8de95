//! Renderer-ready description of a launchable program.

use serde::Serialize;

use super::{ResolvedProgram, jvm_args};

/// Relative directory of the configuration directory entry.
pub const CONFIGURATION_DIRECTORY: &str = "etc";

/// One unit of a program's runtime search path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClasspathEntry {
    /// A directory relative to the assembly base directory.
    Directory { relative_path: String },
    /// An installed artifact, relative to the assembly repository.
    Dependency { group_id: String, artifact_id: String, version: String, relative_path: String },
}

impl ClasspathEntry {
    pub fn directory(relative_path: &str) -> Self {
        ClasspathEntry::Directory { relative_path: relative_path.to_string() }
    }

    pub fn relative_path(&self) -> &str {
        match self {
            ClasspathEntry::Directory { relative_path }
            | ClasspathEntry::Dependency { relative_path, .. } => relative_path,
        }
    }
}

/// Extra runtime arguments handed to the JVM verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JvmSettings {
    pub extra_arguments: Vec<String>,
}

impl JvmSettings {
    /// Build settings from a raw argument string; absent input yields no arguments.
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self { extra_arguments: raw.map(jvm_args::tokenize).unwrap_or_default() }
    }
}

/// Normalized description of one launchable program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Daemon {
    pub id: String,
    pub main_class: String,
    pub classpath: Vec<ClasspathEntry>,
    pub jvm_settings: JvmSettings,
}

impl Daemon {
    /// Compose a daemon from a validated program, its classpath, and raw JVM arguments.
    pub fn build(
        program: &ResolvedProgram,
        classpath: Vec<ClasspathEntry>,
        extra_jvm_arguments: Option<&str>,
    ) -> Self {
        Self {
            id: program.name.clone(),
            main_class: program.main_class.clone(),
            classpath,
            jvm_settings: JvmSettings::from_raw(extra_jvm_arguments),
        }
    }
}
