//! Video containers eligible for fast-start processing.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Container selected for an FFmpeg video render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Mpeg4,
    QuickTime,
}

impl Container {
    /// Canonical lowercase extension, with the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Container::Mpeg4 => ".mp4",
            Container::QuickTime => ".mov",
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Mpeg4 => write!(f, "mpeg4"),
            Container::QuickTime => write!(f, "quicktime"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown container '{0}' (expected mp4 or mov)")]
pub struct UnknownContainer(pub String);

impl FromStr for Container {
    type Err = UnknownContainer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp4" | "mpeg4" | ".mp4" => Ok(Container::Mpeg4),
            "mov" | "quicktime" | ".mov" => Ok(Container::QuickTime),
            _ => Err(UnknownContainer(s.to_string())),
        }
    }
}

/// Extension handling for one render: the container's correct extension and
/// whether the host appends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    correct_extension: String,
    enforce_extension: bool,
}

impl ContainerConfig {
    pub fn new(container: Container, enforce_extension: bool) -> Self {
        Self::with_extension(container.extension(), enforce_extension)
    }

    /// Builds a config from an arbitrary extension; it is stored lowercased.
    pub fn with_extension(correct_extension: &str, enforce_extension: bool) -> Self {
        Self {
            correct_extension: correct_extension.to_ascii_lowercase(),
            enforce_extension,
        }
    }

    pub fn correct_extension(&self) -> &str {
        &self.correct_extension
    }

    pub fn enforce_extension(&self) -> bool {
        self.enforce_extension
    }

    /// True if the user-typed extension matches, ignoring ASCII case.
    pub fn is_correct_extension(&self, user_ext: &str) -> bool {
        !user_ext.is_empty() && user_ext.eq_ignore_ascii_case(&self.correct_extension)
    }
}
