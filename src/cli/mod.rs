//! Command Line Interface (CLI) layer for padsplits.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It wires user-provided options
//! to the library pipeline exposed via `padsplits::api`.
//!
//! If you are embedding padsplits into another application, prefer using
//! `padsplits::pad_splits_with_params` instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
