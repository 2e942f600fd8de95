//! appasm: assemble a runnable application layout and generate launcher scripts.
//!
//! An assembly descriptor lists resolved artifacts, the project artifact, and
//! programs. Validation turns it into normalized per-program configuration;
//! execution installs the artifacts into `<assemble_directory>/repo` and
//! renders one launcher per program and platform into `<assemble_directory>/bin`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AssemblyPlan, AssemblyReport, PlannedScript, ValidatedAssembly, assemble, assemble_config,
    tokenize, validate,
};
pub use app::commands::assemble::validate as validate_config;
pub use domain::{
    AppError, Artifact, ArtifactCoordinates, AssemblyConfig, ClasspathEntry, Daemon, JvmSettings,
    Platform, PlatformSet, Program,
};
