use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::params::{PadParams, Prefix};
use crate::error::{Error, Result};
use crate::types::Entry;

/// Entries sorted by ordinal, plus the shared pad width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordered {
    pub entries: Vec<Entry>,
    pub width: usize,
}

/// Parse the ordinal out of `path`, returning it with the digit count as written.
pub fn parse_ordinal(path: &Path, stem: &str, suffix: &str) -> Result<(u64, usize)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    let digits = name.strip_prefix(stem).unwrap_or(name.as_str());
    let digits = digits.strip_suffix(suffix).unwrap_or(digits);

    let ordinal = digits.parse::<u64>().map_err(|source| Error::Parse {
        name: name.clone(),
        source,
    })?;
    Ok((ordinal, digits.len()))
}

/// Parse every discovered path, compute the pad width and sort by ordinal.
///
/// Fails on the first unparsable name or on two names sharing an ordinal, so
/// nothing is renamed unless the whole batch is valid.
pub fn order_entries(paths: &[PathBuf], prefix: &Prefix, params: &PadParams) -> Result<Ordered> {
    let stem = prefix.file_stem();
    let suffix = params.suffix();

    let mut entries = Vec::with_capacity(paths.len());
    let mut width = 0;
    for path in paths {
        let (ordinal, len) = parse_ordinal(path, stem, &suffix)?;
        debug!("Parsed {} as ordinal {}", path.display(), ordinal);
        width = width.max(len);
        entries.push(Entry::new(ordinal, path.clone()));
    }

    entries.sort_by_key(|e| e.ordinal);

    if let Some(pair) = entries.windows(2).find(|w| w[0].ordinal == w[1].ordinal) {
        return Err(Error::DuplicateOrdinal {
            ordinal: pair[0].ordinal,
            first: pair[0].old_name.clone(),
            second: pair[1].old_name.clone(),
        });
    }

    info!("Ordered {} file(s), pad width {}", entries.len(), width);
    Ok(Ordered { entries, width })
}
