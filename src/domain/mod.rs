pub mod artifact;
pub mod classpath;
pub mod configuration;
pub mod daemon;
pub mod error;
pub mod jvm_args;
pub mod platform;
pub mod program;
pub mod repository;

pub use artifact::{Artifact, ArtifactCoordinates};
pub use classpath::assemble_classpath;
pub use configuration::{AssemblyConfig, DEFAULT_ASSEMBLE_DIRECTORY};
pub use daemon::{CONFIGURATION_DIRECTORY, ClasspathEntry, Daemon, JvmSettings};
pub use error::AppError;
pub use platform::{ALL_PLATFORMS_TAG, Platform, PlatformSet, all_platforms, resolve_platforms};
pub use program::{Program, ResolvedProgram};
pub use repository::{
    ASSEMBLY_REPOSITORY_ID, BIN_DIR, LayoutKind, REPOSITORY_DIR, TargetRepository,
};
