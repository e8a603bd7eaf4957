//! Taskprep - prepare an ECS task definition for re-registration.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskprep::cli::{output, update, Cli};
use taskprep::error::{Error, ParseError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("TASKPREP_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("taskprep=debug")
        } else {
            EnvFilter::new("taskprep=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = update::execute() {
        let suggestion = match &e {
            Error::Parse(ParseError::Read { .. }) => {
                Some("run this from the directory containing task-def.json")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
