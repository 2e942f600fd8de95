pub mod assembly_config;

pub use assembly_config::{AssemblyConfig, DEFAULT_ASSEMBLE_DIRECTORY};
