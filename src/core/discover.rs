use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::core::params::Prefix;
use crate::error::{Error, Result};

/// Return every filesystem path starting with `prefix`, in glob (alphabetical) order.
pub fn discover(prefix: &Prefix) -> Result<Vec<PathBuf>> {
    let pattern = prefix.glob_pattern();
    debug!("Globbing for {}", pattern);

    let paths = glob::glob(&pattern).map_err(|source| Error::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut matches = Vec::new();
    for path in paths {
        matches.push(path?);
    }

    if matches.is_empty() {
        warn!("No files match {}", pattern);
    } else {
        info!("Found {} file(s) matching {}", matches.len(), pattern);
    }
    Ok(matches)
}
