use tracing::info;

use padsplits::{PadParams, RenameReport, pad_splits_with_params};

use super::args::CliArgs;
use super::errors::AppError;

fn move_lines(report: &RenameReport) -> Vec<String> {
    report
        .moves()
        .filter_map(|entry| {
            let new_name = entry.new_name.as_ref()?;
            Some(format!(
                "{} → {}",
                entry.old_name.display(),
                new_name.display()
            ))
        })
        .collect()
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let params = PadParams {
        strategy: args.strategy,
        ..PadParams::default()
    };

    info!("Padding splits for prefix {:?}", args.prefix);
    let report = pad_splits_with_params(&args.prefix, &params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.list {
        for line in move_lines(&report) {
            println!("{}", line);
        }
    }

    info!(
        "Done: renamed {}, already padded {}",
        report.renamed, report.skipped
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args_for(prefix: &str) -> CliArgs {
        CliArgs {
            prefix: prefix.to_string(),
            strategy: padsplits::RenameStrategy::Copy,
            list: false,
            json: false,
            log: false,
        }
    }

    #[test]
    fn test_move_lines_lists_only_moves() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("out-1.csv"), "a").unwrap();
        fs::write(dir.path().join("out-10.csv"), "b").unwrap();

        let report = padsplits::pad_splits(dir.path().join("out").to_str().unwrap()).unwrap();
        let lines = move_lines(&report);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("out-01.csv"));
        assert!(lines[0].contains("out-1.csv → "));
    }

    #[test]
    fn test_run_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("out-abc.csv"), "x").unwrap();

        let err = run(args_for(dir.path().join("out-").to_str().unwrap())).unwrap_err();
        assert!(matches!(err, AppError::Pad(padsplits::Error::Parse { .. })));
        assert!(err.to_string().contains("out-abc.csv"));
    }

    #[test]
    fn test_run_empty_prefix() {
        let err = run(args_for("   ")).unwrap_err();
        assert_eq!(err.to_string(), "got empty prefix; need one prefix");
    }
}
