//! Command-line interface for file-explorer.
//!
//! Walks a directory tree and writes the report to
//! `file_explorer_<YYYYMMDD_HHMMSS>.txt` in the current directory.

use chrono::Local;
use clap::Parser;
use file_explorer::{ExploreBuilder, report_file_name, write_report_to_file};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;

/// file-explorer — write a report of every file under a directory
#[derive(Parser)]
#[command(name = "file-explorer", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".", allow_hyphen_values = true)]
    root: PathBuf,

    /// Arguments after the root are ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<OsString>,
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let started_at = Local::now();
    let output_file = report_file_name(&started_at);

    println!("ディレクトリ \"{}\" の探索を開始します...", cli.root.display());
    println!("結果は {} に出力されます。", output_file);

    let options = ExploreBuilder::new(cli.root).started_at(started_at).build();
    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    let summary = match write_report_to_file(&options, &output_file) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    #[cfg(feature = "logging")]
    tracing::info!(
        "{} files recorded ({} binary, {} undecodable, {} unreadable, {} errors)",
        summary.files,
        summary.binary,
        summary.undecodable,
        summary.unreadable,
        summary.errors
    );

    println!("探索が完了しました。");
}
