#![doc = r#"
padsplits — zero-pad the numeric suffixes of split CSV files.

Tools that split a CSV into parts usually name them `out-1.csv` … `out-11.csv`,
which sort as `out-1, out-10, out-11, out-2, …`. This crate renames such a set so
every number has the same width (`out-01.csv` … `out-11.csv`) and lexical order
matches numeric order. It powers the `padsplits` CLI and can be embedded directly.

How it works
------------
1. Discovery: glob for `<prefix>*`, after appending the separator (`-`) to the
   prefix if it is missing.
2. Ordering: parse the number between the prefix and `.csv`, take the longest
   numeral as the pad width, sort by number. Unparsable names and duplicate
   numbers are rejected before anything is renamed.
3. Rename: move each file to `<prefix><number padded to width>.csv`, skipping
   files that already have that name. The default strategy copies then deletes,
   which works across filesystems but is not atomic.

Running it twice is a no-op the second time.

Quick start
-----------
```rust,no_run
fn main() -> padsplits::Result<()> {
    let report = padsplits::pad_splits("/data/out-")?;
    for entry in report.moves() {
        println!("{} -> {:?}", entry.old_name.display(), entry.new_name);
    }
    Ok(())
}
```

Custom parameters
-----------------
```rust,no_run
use padsplits::{PadParams, RenameStrategy, pad_splits_with_params};

fn main() -> padsplits::Result<()> {
    let params = PadParams {
        separator: '_',
        extension: "tsv".to_string(),
        strategy: RenameStrategy::Rename,
    };
    let report = pad_splits_with_params("/data/part", &params)?;
    println!("renamed={} skipped={} width={}", report.renamed, report.skipped, report.width);
    Ok(())
}
```

Error handling
--------------
All public functions return `padsplits::Result<T>`; match on `padsplits::Error`
to handle specific cases.

```rust,no_run
use padsplits::{Error, pad_splits};

fn main() {
    match pad_splits("/data/out") {
        Ok(_) => {}
        Err(Error::Parse { name, .. }) => eprintln!("foreign file: {name}"),
        Err(Error::DuplicateOrdinal { ordinal, .. }) => eprintln!("{ordinal} appears twice"),
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points and `RenameReport`.
- [`core`] — the individual pipeline stages.
- [`types`] — `Entry` and `RenameStrategy`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::params::{PadParams, Prefix};
pub use error::{Error, Result};
pub use types::{Entry, RenameStrategy};

pub use api::{RenameReport, pad_splits, pad_splits_with_params};
