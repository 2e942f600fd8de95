mod artifact_installer;
mod repository_layout;
mod script_renderer;

pub use artifact_installer::ArtifactInstaller;
pub use repository_layout::RepositoryLayout;
pub use script_renderer::ScriptRenderer;
