//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together descriptor
//! loading, context creation, and command execution.

use std::path::Path;

use crate::adapters::{FilesystemArtifactInstaller, MinijinjaScriptRenderer};
use crate::app::{
    AppContext,
    commands::{assemble, validate},
    config::load_config,
};
use crate::domain::{AssemblyConfig, jvm_args};

pub use crate::app::commands::assemble::{AssemblyReport, PlannedScript, ValidatedAssembly};
pub use crate::app::commands::validate::AssemblyPlan;
pub use crate::domain::AppError;

/// Create an `AppContext` wired to the filesystem and embedded templates.
fn create_context(
    config: &AssemblyConfig,
) -> Result<AppContext<FilesystemArtifactInstaller, MinijinjaScriptRenderer>, AppError> {
    let renderer = MinijinjaScriptRenderer::new()?
        .with_bin_prefix(config.bin_prefix.clone().unwrap_or_default());
    Ok(AppContext::new(FilesystemArtifactInstaller::new(), renderer))
}

/// Assemble the application described by the descriptor at `config_path`.
pub fn assemble(config_path: &Path) -> Result<AssemblyReport, AppError> {
    let config = load_config(config_path)?;
    assemble_config(config)
}

/// Assemble from an already loaded descriptor.
pub fn assemble_config(config: AssemblyConfig) -> Result<AssemblyReport, AppError> {
    let ctx = create_context(&config)?;
    assemble::execute(config, &ctx)
}

/// Validate the descriptor at `config_path` and return the resolved plan.
pub fn validate(config_path: &Path) -> Result<AssemblyPlan, AppError> {
    let config = load_config(config_path)?;
    validate::execute(config)
}

/// Split a raw JVM argument string the way launchers receive it.
pub fn tokenize(raw: &str) -> Vec<String> {
    jvm_args::tokenize(raw)
}
