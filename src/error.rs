//! Crate-level error types.

use std::fmt;

/// Errors produced by the pickmark crate.
///
/// Picking and selection never fail; these cover the ambient surfaces
/// (options files and driver input).
#[derive(Debug)]
pub enum PickmarkError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A driver command line could not be parsed.
    Command(String),
    /// A named preset is not present in the preset directory.
    UnknownPreset {
        /// The requested preset name.
        name: String,
        /// Presets that do exist, sorted.
        available: Vec<String>,
    },
}

impl fmt::Display for PickmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Command(msg) => write!(f, "command error: {msg}"),
            Self::UnknownPreset { name, available } => {
                write!(f, "unknown preset '{name}' (available: ")?;
                if available.is_empty() {
                    write!(f, "none)")
                } else {
                    write!(f, "{})", available.join(", "))
                }
            }
        }
    }
}

impl std::error::Error for PickmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PickmarkError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
