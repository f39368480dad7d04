use clap::Parser;

use padsplits::RenameStrategy;

#[derive(Parser, Debug)]
#[command(
    name = "padsplits",
    version,
    about = "Pad the numbers of split CSV files so they sort numerically",
    long_about = "Find CSV files created by a split, prefixed with PREFIX, like\n\
                  out-1.csv...out-11.csv, and pad the numbers so they sort numerically,\n\
                  like out-01.csv...out-11.csv."
)]
pub struct CliArgs {
    /// Prefix of the split files (e.g. out- or dir/out); a trailing '-' is added if missing
    pub prefix: String,

    /// How to move files: copy then delete (works across filesystems) or atomic rename
    #[arg(long, value_enum, default_value_t = RenameStrategy::Copy)]
    pub strategy: RenameStrategy,

    /// Print one "old → new" line per moved file
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Print the full rename report as JSON
    #[arg(long, default_value_t = false, conflicts_with = "list")]
    pub json: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
