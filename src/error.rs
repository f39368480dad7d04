//! Crate-level error type and `Result` alias.
//! Every stage of the pipeline (prefix validation, discovery, parsing, rename)
//! reports through this enum; nothing in the library terminates the process.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("got empty prefix; need one prefix")]
    EmptyPrefix,

    #[error("could not glob for {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("could not read directory entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("could not parse number in filename {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("ordinal {ordinal} appears in both {} and {}", .first.display(), .second.display())]
    DuplicateOrdinal {
        ordinal: u64,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("could not move {} to {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn moving(from: impl Into<PathBuf>, to: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Move {
            from: from.into(),
            to: to.into(),
            source,
        }
    }
}
