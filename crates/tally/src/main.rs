#![forbid(unsafe_code)]

//! # Tally
//!
//! Terminal counter with Increment/Decrement controls.
//!
//! ## Usage
//!
//! ```bash
//! tally                # start at zero
//! tally --count 10     # start at ten
//! tally --inline       # keep the terminal scrollback
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tally::Counter;
use tealoop::Program;

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "A terminal counter with a zero floor")]
struct Args {
    /// Starting value. Negative values are clamped to zero.
    #[arg(short = 'c', long = "count", default_value_t = 0, allow_negative_numbers = true)]
    count: i64,

    /// Render inline instead of taking over the alternate screen.
    #[arg(long)]
    inline: bool,

    /// Append debug logs to this file. The terminal itself belongs to the
    /// TUI, so logs never go to stdout or stderr.
    #[arg(long, env = "TALLY_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tally=debug,tealoop=debug")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut program = Program::new(Counter::new(args.count)).with_mouse();
    if !args.inline {
        program = program.with_alt_screen();
    }

    let counter = program.run().context("failed to run counter")?;

    println!("Final count: {}", counter.value());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["tally"]);
        assert_eq!(args.count, 0);
        assert!(!args.inline);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_args_count() {
        let args = Args::parse_from(["tally", "--count", "10"]);
        assert_eq!(args.count, 10);

        let args = Args::parse_from(["tally", "-c", "-3"]);
        assert_eq!(args.count, -3);
    }
}
