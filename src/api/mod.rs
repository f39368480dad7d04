//! High-level library API: run the whole discover -> order -> rename pipeline
//! for a prefix and get back a serializable report. Prefer these entrypoints
//! over the individual `core` stages when embedding padsplits.
use serde::Serialize;

use crate::core::discover::discover;
use crate::core::ordering::{Ordered, order_entries};
use crate::core::params::{PadParams, Prefix};
use crate::core::rename::rename_all;
use crate::error::Result;
use crate::types::Entry;

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    pub width: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub entries: Vec<Entry>,
}

impl RenameReport {
    fn new(width: usize, entries: Vec<Entry>) -> Self {
        let renamed = entries.iter().filter(|e| e.moved).count();
        Self {
            width,
            renamed,
            skipped: entries.len() - renamed,
            entries,
        }
    }

    /// Entries that were actually moved, in ordinal order.
    pub fn moves(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.moved)
    }
}

/// Pad the numbered files starting with `prefix` using the default parameters
/// (`-` separator, `.csv` extension, copy-then-delete).
pub fn pad_splits(prefix: &str) -> Result<RenameReport> {
    pad_splits_with_params(prefix, &PadParams::default())
}

/// Pad the numbered files starting with `prefix`.
///
/// Every matched name is parsed and validated before the first file is
/// touched; a rename failure aborts the run without undoing earlier renames.
pub fn pad_splits_with_params(prefix: &str, params: &PadParams) -> Result<RenameReport> {
    let prefix = Prefix::new(prefix, params.separator)?;
    let paths = discover(&prefix)?;
    let Ordered { mut entries, width } = order_entries(&paths, &prefix, params)?;
    rename_all(&mut entries, &prefix, params, width)?;
    Ok(RenameReport::new(width, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_report_counts() {
        let mut moved = Entry::new(1, PathBuf::from("out-1.csv"));
        moved.new_name = Some(PathBuf::from("out-01.csv"));
        moved.moved = true;
        let mut kept = Entry::new(10, PathBuf::from("out-10.csv"));
        kept.new_name = Some(PathBuf::from("out-10.csv"));

        let report = RenameReport::new(2, vec![moved, kept]);
        assert_eq!(report.renamed, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.moves().count(), 1);
    }

    #[test]
    fn test_report_serializes() {
        let mut entry = Entry::new(3, PathBuf::from("out-3.csv"));
        entry.new_name = Some(PathBuf::from("out-03.csv"));
        entry.moved = true;
        let report = RenameReport::new(2, vec![entry]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["width"], 2);
        assert_eq!(json["renamed"], 1);
        assert_eq!(json["entries"][0]["old_name"], "out-3.csv");
        assert_eq!(json["entries"][0]["new_name"], "out-03.csv");
    }

    #[test]
    fn test_pad_splits_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("part_1.tsv"), "a").unwrap();
        fs::write(dir.path().join("part_12.tsv"), "b").unwrap();

        let params = PadParams {
            separator: '_',
            extension: "tsv".to_string(),
            ..PadParams::default()
        };
        let report =
            pad_splits_with_params(dir.path().join("part").to_str().unwrap(), &params).unwrap();

        assert_eq!(report.renamed, 1);
        assert_eq!(fs::read_to_string(dir.path().join("part_01.tsv")).unwrap(), "a");
        assert!(dir.path().join("part_12.tsv").exists());
    }

    #[test]
    fn test_pad_splits_empty_prefix() {
        assert!(matches!(pad_splits("  "), Err(crate::Error::EmptyPrefix)));
    }
}
