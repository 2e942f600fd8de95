mod recording_installer;
mod recording_renderer;

pub use recording_installer::RecordingInstaller;
pub use recording_renderer::RecordingRenderer;
