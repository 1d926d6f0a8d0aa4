//! Companion-file suffix sanitization.

use std::fmt;

/// Suffix used when the configured one is blank or sanitizes to nothing.
pub const DEFAULT_SUFFIX: &str = "-faststart";

/// Characters reserved in filenames on at least one supported platform.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// A non-empty, filesystem-safe suffix inserted before a file's extension.
///
/// Never contains reserved characters, `..`, or ASCII control characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix(String);

impl Suffix {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Suffix {
    fn default() -> Self {
        Suffix(DEFAULT_SUFFIX.to_string())
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitizes a user-configured suffix. Total: degrades to [`DEFAULT_SUFFIX`]
/// instead of failing.
///
/// - Trims surrounding whitespace
/// - Removes every `..`
/// - Replaces `< > : " / \ | ? *` with `_`
/// - Drops ASCII control characters (0x00-0x1F)
///
/// The steps repeat until nothing changes, so removing a control character
/// can never leave a `..` or outer whitespace behind.
pub fn sanitize_suffix(raw: &str) -> Suffix {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Suffix::default();
    }

    let mut current = trimmed.to_string();
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }

    if current.trim().is_empty() {
        if trimmed != DEFAULT_SUFFIX {
            tracing::info!(
                suffix = trimmed,
                "suffix became blank after sanitization, using default {}",
                DEFAULT_SUFFIX
            );
        }
        return Suffix::default();
    }
    if current != trimmed {
        tracing::info!("suffix sanitized from '{}' to '{}'", trimmed, current);
    }
    Suffix(current)
}

fn sanitize_pass(s: &str) -> String {
    s.trim()
        .replace("..", "")
        .chars()
        .filter(|c| !matches!(c, '\x00'..='\x1f'))
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
