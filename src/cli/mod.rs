//! Command-line interface.

pub mod output;
pub mod update;

use clap::Parser;

/// Taskprep - prepare an ECS task definition for re-registration.
///
/// Which file is read, which image is set, and which secrets are merged are
/// compiled in; the flags here only shape reporting.
#[derive(Parser)]
#[command(
    name = "taskprep",
    about = "Prepare an ECS task definition for re-registration",
    version
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
