//! Assemble command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_assemble(config: &Path) -> Result<(), AppError> {
    let report = crate::app::api::assemble(config)?;

    println!(
        "✅ Assembled {} artifact(s) and {} launcher script(s)",
        report.installed.len(),
        report.scripts.len()
    );
    for script in &report.scripts {
        println!("  {}", script.display());
    }
    Ok(())
}
