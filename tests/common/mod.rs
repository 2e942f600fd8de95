//! Shared testing utilities for appasm CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `appasm` binary within the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("appasm").expect("Failed to locate appasm binary");
        cmd.current_dir(self.work_dir()).env_remove("APPASM_LOG").env_remove("RUST_LOG");
        cmd
    }

    /// Write a fake jar under `lib/` and return its path relative to the project.
    pub fn write_jar(&self, name: &str, content: &str) -> String {
        let relative = format!("lib/{}", name);
        let path = self.work_dir.join(&relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        relative
    }

    /// Write `appasm.toml` into the project directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("appasm.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a descriptor with one dependency, the project jar and one program.
    pub fn write_standard_project(&self) -> PathBuf {
        self.write_jar("slf4j-api-2.0.9.jar", "slf4j");
        self.write_jar("app-1.0.jar", "app");
        self.write_config(STANDARD_CONFIG)
    }

    /// Path inside the default assemble directory.
    pub fn assembled(&self, relative: &str) -> PathBuf {
        self.work_dir.join("target/appassembler").join(relative)
    }

    pub fn read_assembled(&self, relative: &str) -> String {
        fs::read_to_string(self.assembled(relative))
            .unwrap_or_else(|e| panic!("cannot read {}: {}", relative, e))
    }
}

pub const STANDARD_CONFIG: &str = r#"
extra_jvm_arguments = "-Xmx512m -Dgreeting=\"hello world\""

[project]
group_id = "com.example"
artifact_id = "app"
version = "1.0"
file = "lib/app-1.0.jar"

[[artifacts]]
group_id = "org.slf4j"
artifact_id = "slf4j-api"
version = "2.0.9"
file = "lib/slf4j-api-2.0.9.jar"

[[programs]]
name = "app"
main_class = "com.example.Main"
"#;
