use crate::ports::{ArtifactInstaller, ScriptRenderer};

/// Application context holding the collaborators an assembly run drives.
pub struct AppContext<I: ArtifactInstaller, R: ScriptRenderer> {
    installer: I,
    renderer: R,
}

impl<I: ArtifactInstaller, R: ScriptRenderer> AppContext<I, R> {
    /// Create a new application context.
    pub fn new(installer: I, renderer: R) -> Self {
        Self { installer, renderer }
    }

    /// Get a reference to the artifact installer.
    pub fn installer(&self) -> &I {
        &self.installer
    }

    /// Get a reference to the script renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
