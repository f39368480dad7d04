//! Shared types used across padsplits.
//! Includes the discovered `Entry` and the `RenameStrategy` selector.
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize, Serializer};

/// How a file is moved to its padded name.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameStrategy {
    /// Stream-copy into the new name, then delete the old file.
    /// Works across filesystems but is not atomic.
    #[default]
    Copy,
    /// Atomic `std::fs::rename`; both names must be on the same filesystem.
    Rename,
}

impl std::fmt::Display for RenameStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RenameStrategy::Copy => "copy",
            RenameStrategy::Rename => "rename",
        };
        write!(f, "{}", s)
    }
}

/// A matched file: its parsed ordinal, where it was found, and where it goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub ordinal: u64,
    #[serde(serialize_with = "lossy_path")]
    pub old_name: PathBuf,
    /// Set once the pad width is known; `None` until the rename stage.
    #[serde(serialize_with = "lossy_optional_path")]
    pub new_name: Option<PathBuf>,
    /// False for no-op renames (new name already equals old name).
    pub moved: bool,
}

impl Entry {
    pub fn new(ordinal: u64, old_name: PathBuf) -> Self {
        Self {
            ordinal,
            old_name,
            new_name: None,
            moved: false,
        }
    }
}

// Non-UTF-8 names serialize with U+FFFD in place of invalid bytes.
fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn lossy_optional_path<S: Serializer>(
    path: &Option<PathBuf>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match path {
        Some(p) => serializer.serialize_some(&p.to_string_lossy()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_paths_as_strings() {
        let mut entry = Entry::new(4, PathBuf::from("dir/out-4.csv"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["old_name"], "dir/out-4.csv");
        assert!(json["new_name"].is_null());

        entry.new_name = Some(PathBuf::from("dir/out-04.csv"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["new_name"], "dir/out-04.csv");
    }

    #[cfg(unix)]
    #[test]
    fn test_entry_serializes_non_utf8_paths() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut entry = Entry::new(1, PathBuf::from(OsStr::from_bytes(b"out-\xff-1.csv")));
        entry.new_name = Some(PathBuf::from(OsStr::from_bytes(b"out-\xff-01.csv")));
        entry.moved = true;

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["old_name"], "out-\u{FFFD}-1.csv");
        assert_eq!(json["new_name"], "out-\u{FFFD}-01.csv");
    }
}
