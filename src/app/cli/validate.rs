//! Validate command implementation.

use std::path::Path;

use crate::domain::{AppError, ClasspathEntry};

pub fn run_validate(config: &Path, json: bool) -> Result<(), AppError> {
    let plan = crate::app::api::validate(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("✅ Configuration is valid");
    println!("Assemble directory: {}", plan.assemble_directory.display());
    println!("Repository layout: {}", plan.repository_layout);

    if plan.scripts.is_empty() {
        println!("\nNo launcher scripts would be generated.");
        return Ok(());
    }

    for script in &plan.scripts {
        println!("\n{} ({})", script.program, script.platform);
        println!("  main class: {}", script.daemon.main_class);
        for entry in &script.daemon.classpath {
            match entry {
                ClasspathEntry::Directory { relative_path } => {
                    println!("  classpath: {}/ (directory)", relative_path)
                }
                ClasspathEntry::Dependency { relative_path, .. } => {
                    println!("  classpath: repo/{}", relative_path)
                }
            }
        }
        for argument in &script.daemon.jvm_settings.extra_arguments {
            println!("  jvm arg: {}", argument);
        }
    }
    Ok(())
}
