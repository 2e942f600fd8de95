//! Validate command: resolve the descriptor into a printable plan.

use std::path::PathBuf;

use serde::Serialize;

use super::assemble::{self, PlannedScript};
use crate::domain::{AppError, AssemblyConfig, LayoutKind, PlatformSet};

/// The fully resolved assembly, without any side effects performed.
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyPlan {
    pub assemble_directory: PathBuf,
    pub repository_layout: LayoutKind,
    pub default_platforms: PlatformSet,
    pub scripts: Vec<PlannedScript>,
}

/// Validate a descriptor and describe what `assemble` would generate.
pub fn execute(config: AssemblyConfig) -> Result<AssemblyPlan, AppError> {
    let validated = assemble::validate(config)?;

    Ok(AssemblyPlan {
        assemble_directory: validated.assemble_directory().to_path_buf(),
        repository_layout: validated.layout(),
        default_platforms: validated.default_platforms().clone(),
        scripts: validated.plan(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Artifact, ArtifactCoordinates, Platform, Program};

    #[test]
    fn plan_serializes_to_json() {
        let mut config = AssemblyConfig::new(Artifact::new(
            ArtifactCoordinates::new("com.example", "app", "1.0"),
            "app.jar",
        ));
        config.repository_layout = Some("legacy".into());
        config.platforms = Some(vec!["windows".into()]);
        config.programs = vec![Program::new("app", "com.example.Main")];

        let plan = execute(config).unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(plan.scripts.len(), 1);
        assert_eq!(plan.scripts[0].platform, Platform::Windows);
        assert_eq!(json["repository_layout"], "legacy");
        assert_eq!(json["default_platforms"][0], "windows");
        assert_eq!(
            json["scripts"][0]["daemon"]["classpath"][1]["relative_path"],
            "com.example/jars/app-1.0.jar"
        );
    }
}
