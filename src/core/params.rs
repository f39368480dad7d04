use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::RenameStrategy;

pub const DEFAULT_SEPARATOR: char = '-';
pub const DEFAULT_EXTENSION: &str = "csv";

/// Padding parameters suitable for config files and embedding applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadParams {
    /// Character separating the prefix from the number; appended to the prefix when missing
    pub separator: char,
    /// File extension without the leading dot
    pub extension: String,
    pub strategy: RenameStrategy,
}

impl Default for PadParams {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            extension: DEFAULT_EXTENSION.to_string(),
            strategy: RenameStrategy::Copy,
        }
    }
}

impl PadParams {
    /// Extension including the leading dot, e.g. `.csv`
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}

/// A trimmed, non-empty prefix that always ends with the separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    full: String,
}

impl Prefix {
    pub fn new(raw: &str, separator: char) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyPrefix);
        }

        let mut full = trimmed.to_string();
        if !full.ends_with(separator) {
            full.push(separator);
        }
        Ok(Self { full })
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Glob pattern matching every path that starts with the prefix.
    /// Metacharacters in the prefix itself are escaped so it matches literally.
    pub fn glob_pattern(&self) -> String {
        format!("{}*", glob::Pattern::escape(&self.full))
    }

    /// The part of the prefix that belongs to the file name, i.e. after the last
    /// path separator (`dir/out-` -> `out-`).
    pub fn file_stem(&self) -> &str {
        self.full
            .rsplit(std::path::is_separator)
            .next()
            .unwrap_or(&self.full)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}
