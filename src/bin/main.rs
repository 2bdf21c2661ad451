use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pwd_policy::{
    AuditReport, FailureMode, audit_lines, drop_final_empty_line, get_input_path, read_lines,
};

#[derive(Debug, Parser)]
#[command(
    name = "pwd-policy",
    version,
    about = "Count password entries that satisfy their occurrence policy"
)]
struct Cli {
    /// Entry file; falls back to PWD_POLICY_INPUT_PATH, then ./exercise_part_one_input.txt
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Report malformed lines instead of aborting on the first one
    #[arg(long, default_value_t = false)]
    collect_errors: bool,

    /// Ignore the empty line produced by a trailing newline
    #[arg(long, default_value_t = false)]
    skip_final_newline: bool,

    /// Log each entry as it is checked
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            tracing::debug!(error = ?err, "pwd-policy run failed");
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<AuditReport> {
    let path = cli.input.unwrap_or_else(get_input_path);
    let mut lines =
        read_lines(&path).with_context(|| format!("cannot load entries from {}", path.display()))?;
    if cli.skip_final_newline {
        drop_final_empty_line(&mut lines);
    }

    let mode = if cli.collect_errors {
        FailureMode::CollectAll
    } else {
        FailureMode::FailFast
    };

    let report = audit_lines(lines.as_slice(), mode)
        .with_context(|| format!("audit of {} aborted", path.display()))?;
    Ok(report)
}
