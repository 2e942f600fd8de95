//! Program descriptors and their validated form.

use serde::{Deserialize, Serialize};

use super::{AppError, PlatformSet, resolve_platforms};

/// A launchable program as declared in the assembly descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Program {
    /// Program name; becomes the launcher file name and the daemon id.
    pub name: String,
    /// Fully qualified main class.
    #[serde(default)]
    pub main_class: String,
    /// Requested platform tags; absent means the run-wide default.
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    /// JVM arguments for this program only; replaces the run-wide string.
    #[serde(default)]
    pub extra_jvm_arguments: Option<String>,
}

impl Program {
    pub fn new(name: &str, main_class: &str) -> Self {
        Self {
            name: name.to_string(),
            main_class: main_class.to_string(),
            platforms: None,
            extra_jvm_arguments: None,
        }
    }

    pub fn with_platforms(mut self, platforms: &[&str]) -> Self {
        self.platforms = Some(platforms.iter().map(|p| p.to_string()).collect());
        self
    }

    /// Validate this program and resolve its platforms against the run default.
    pub fn resolve(&self, default_platforms: &PlatformSet) -> Result<ResolvedProgram, AppError> {
        validate_name(&self.name)?;

        let main_class = self.main_class.trim();
        if main_class.is_empty() {
            return Err(AppError::config_error(format!(
                "Missing main class in Program configuration for '{}'",
                self.name
            )));
        }

        validate_main_class(&self.name, main_class)?;

        let platforms = resolve_platforms(self.platforms.as_deref(), default_platforms)?;

        Ok(ResolvedProgram {
            name: self.name.clone(),
            main_class: main_class.to_string(),
            platforms,
            extra_jvm_arguments: self.extra_jvm_arguments.clone(),
        })
    }
}

/// A program after validation: immutable, with its effective platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProgram {
    pub name: String,
    pub main_class: String,
    pub platforms: PlatformSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_jvm_arguments: Option<String>,
}

fn validate_name(name: &str) -> Result<(), AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::config_error("Missing name in Program configuration"));
    }
    let plain = name.chars().all(|c| c.is_ascii_alphanumeric() || "._-".contains(c));
    if !plain || name == "." || name == ".." {
        return Err(AppError::config_error(format!(
            "Invalid program name '{}': must be a plain file name",
            name
        )));
    }
    Ok(())
}

/// Dot-separated Java identifiers; `$` allowed for nested classes.
fn validate_main_class(program: &str, main_class: &str) -> Result<(), AppError> {
    let valid = main_class.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars.next().is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    });
    if !valid {
        return Err(AppError::config_error(format!(
            "Invalid main class '{}' in Program configuration for '{}'",
            main_class, program
        )));
    }
    Ok(())
}
