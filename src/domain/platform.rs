//! Target platforms for generated launcher scripts.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::AppError;

/// Shorthand tag that expands to every supported platform.
pub const ALL_PLATFORMS_TAG: &str = "all";

/// A script dialect the assembler can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Every supported platform, in emission order.
    pub const ALL: [Platform; 2] = [Platform::Unix, Platform::Windows];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Unix => "unix",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Platform::ALL.into_iter().find(|p| p.as_str() == tag).ok_or_else(|| invalid_platform(tag))
    }
}

/// Ordered set of platforms; iteration is deterministic.
pub type PlatformSet = BTreeSet<Platform>;

/// The full universe of supported platforms.
pub fn all_platforms() -> PlatformSet {
    Platform::ALL.into_iter().collect()
}

/// Resolve requested platform tags against a fallback.
///
/// - `None` yields `fallback` unchanged.
/// - Exactly `["all"]` yields every supported platform.
/// - Otherwise every tag must name a supported platform.
pub fn resolve_platforms(
    requested: Option<&[String]>,
    fallback: &PlatformSet,
) -> Result<PlatformSet, AppError> {
    let Some(tags) = requested else {
        return Ok(fallback.clone());
    };

    if let [only] = tags
        && only == ALL_PLATFORMS_TAG
    {
        return Ok(all_platforms());
    }

    tags.iter().map(|tag| tag.parse::<Platform>()).collect()
}

fn invalid_platform(tag: &str) -> AppError {
    let supported: Vec<&str> = Platform::ALL.iter().map(|p| p.as_str()).collect();
    AppError::config_error(format!(
        "Non-valid platform '{}' declared, supported types are: [{}]",
        tag,
        supported.join(", ")
    ))
}
