//! Assembly descriptor loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, AssemblyConfig};

/// Default descriptor file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "appasm.toml";

/// Load an assembly descriptor and resolve its relative paths.
///
/// `.yml`/`.yaml` files are read as YAML, anything else as TOML. Relative
/// paths inside the descriptor are taken relative to its directory.
pub fn load_config(path: &Path) -> Result<AssemblyConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigMissing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml" | "yaml") => AssemblyConfig::parse_yaml(&content),
        _ => AssemblyConfig::parse_toml(&content),
    }
    .map_err(|err| match err {
        AppError::ParseError { details, .. } => {
            AppError::ParseError { what: path.display().to_string(), details }
        }
        other => other,
    })?;

    let base = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir()?,
    };
    debug!(config = %path.display(), base = %base.display(), "loaded assembly descriptor");

    Ok(config.rebase(&base))
}
