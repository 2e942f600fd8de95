pub mod filesystem_installer;
pub mod layouts;
pub mod script_renderer_minijinja;

pub use filesystem_installer::FilesystemArtifactInstaller;
pub use layouts::{DefaultRepositoryLayout, LegacyRepositoryLayout, layout_for};
pub use script_renderer_minijinja::MinijinjaScriptRenderer;
