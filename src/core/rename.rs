use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::params::{PadParams, Prefix};
use crate::error::{Error, Result};
use crate::types::{Entry, RenameStrategy};

/// Padded path for `ordinal`, placed next to `old_name`.
pub fn padded_name(old_name: &Path, stem: &str, ordinal: u64, width: usize, suffix: &str) -> PathBuf {
    old_name.with_file_name(format!("{stem}{ordinal:0width$}{suffix}"))
}

/// Move `from` to `to`. Returns `false` without touching the disk when the names are equal.
pub fn move_file(from: &Path, to: &Path, strategy: RenameStrategy) -> Result<bool> {
    if from == to {
        return Ok(false);
    }

    let moved = match strategy {
        RenameStrategy::Copy => copy_then_delete(from, to),
        RenameStrategy::Rename => fs::rename(from, to),
    };
    moved.map_err(|e| Error::moving(from, to, e))?;
    Ok(true)
}

// Not atomic: a failure mid-copy leaves `from` intact and `to` partially written.
fn copy_then_delete(from: &Path, to: &Path) -> io::Result<()> {
    {
        let mut input = File::open(from)?;
        let mut output = File::create(to)?;
        io::copy(&mut input, &mut output)?;
    }
    fs::remove_file(from)
}

/// Rename every entry in order, filling in `new_name` and `moved`.
/// Stops at the first failure; earlier renames are not rolled back.
pub fn rename_all(
    entries: &mut [Entry],
    prefix: &Prefix,
    params: &PadParams,
    width: usize,
) -> Result<()> {
    let stem = prefix.file_stem();
    let suffix = params.suffix();

    let mut renamed = 0;
    for entry in entries.iter_mut() {
        let new_name = padded_name(&entry.old_name, stem, entry.ordinal, width, &suffix);
        entry.moved = move_file(&entry.old_name, &new_name, params.strategy)?;
        if entry.moved {
            debug!("Moved {} -> {}", entry.old_name.display(), new_name.display());
            renamed += 1;
        } else {
            debug!("Skipping {}: already padded", entry.old_name.display());
        }
        entry.new_name = Some(new_name);
    }

    info!(
        "Renamed {} of {} file(s) using {} strategy",
        renamed,
        entries.len(),
        params.strategy
    );
    Ok(())
}
