//! Primer CLI
//!
//! Runs the tutorial programs. With no subcommand both programs run, the
//! collections program first.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::process;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod programs;

/// Env var holding the tracing filter
const LOG_VAR: &str = "PRIMER_LOG";

/// Largest accepted `--delay-ms` / `--timeout-ms`
const MAX_WAIT_MS: u64 = primer_runtime::MAX_WAIT.as_millis() as u64;

#[derive(Parser)]
#[command(name = "primer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Primer - small tours of collections, traits and strands", long_about = None)]
struct Cli {
    /// Log runtime events (strands, races) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Arrays, slices, maps and records
    Collections,

    /// Animals and movers, the timed receive race, and division
    Concepts,

    /// Run a single timed receive race
    Race {
        /// How long the producer sleeps before sending (at most one day)
        #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(..=MAX_WAIT_MS))]
        delay_ms: u64,

        /// How long the receiver waits (at most one day)
        #[arg(long, default_value_t = 2000, value_parser = clap::value_parser!(u64).range(..=MAX_WAIT_MS))]
        timeout_ms: u64,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    primer_runtime::scheduler_init();

    match cli.command {
        None => {
            run_collections();
            run_concepts();
        }
        Some(Commands::Collections) => run_collections(),
        Some(Commands::Concepts) => run_concepts(),
        Some(Commands::Race {
            delay_ms,
            timeout_ms,
        }) => {
            let delay = Duration::from_millis(delay_ms);
            let timeout = Duration::from_millis(timeout_ms);
            if let Err(e) = programs::run_race(delay, timeout) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "primer", &mut io::stdout());
            return;
        }
    }

    // Abandoned producers are still sleeping; let them finish before exit
    primer_runtime::wait_all_strands();
    primer_runtime::emit_report();
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_collections() {
    info!("running collections program");
    if let Err(e) = programs::run_collections() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_concepts() {
    info!("running concepts program");
    if let Err(e) = programs::run_concepts() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_everything() {
        let cli = Cli::try_parse_from(["primer"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_race_defaults() {
        let cli = Cli::try_parse_from(["primer", "race"]).unwrap();
        match cli.command {
            Some(Commands::Race {
                delay_ms,
                timeout_ms,
            }) => {
                assert_eq!(delay_ms, 1000);
                assert_eq!(timeout_ms, 2000);
            }
            _ => panic!("expected race subcommand"),
        }
    }

    #[test]
    fn test_race_flags_and_verbose() {
        let cli = Cli::try_parse_from([
            "primer",
            "race",
            "--delay-ms",
            "3000",
            "--timeout-ms",
            "1000",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Some(Commands::Race {
                delay_ms: 3000,
                timeout_ms: 1000
            })
        ));
    }

    #[test]
    fn test_race_rejects_waits_past_one_day() {
        let too_long = (MAX_WAIT_MS + 1).to_string();
        assert!(Cli::try_parse_from(["primer", "race", "--delay-ms", &too_long]).is_err());
        assert!(Cli::try_parse_from(["primer", "race", "--timeout-ms", &too_long]).is_err());
        assert!(
            Cli::try_parse_from(["primer", "race", "--delay-ms", "18446744073709551"]).is_err()
        );

        let at_limit = MAX_WAIT_MS.to_string();
        let cli = Cli::try_parse_from(["primer", "race", "--delay-ms", &at_limit]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Race { delay_ms, .. }) if delay_ms == MAX_WAIT_MS
        ));
    }
}
