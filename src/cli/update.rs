//! Update operation - load the task definition, apply the deployment
//! edits, and write the registration input.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::{constants, descriptor, transform};
use crate::error::Result;

/// Run the full transformation against the working directory.
///
/// Reads `task-def.json`, edits it in memory, and writes
/// `task-def-updated.json`. The output file is only created once every
/// in-memory edit has succeeded, so a failure leaves nothing behind.
pub fn execute() -> Result<()> {
    let input = Path::new(constants::INPUT_FILE);
    let out = Path::new(constants::OUTPUT_FILE);

    let mut task_def = descriptor::load(input)?;
    let outcome = transform::apply(&mut task_def)?;
    descriptor::write(out, &task_def)?;

    info!(
        appended = outcome.appended.len(),
        output = %out.display(),
        "task definition prepared"
    );

    output::kv("family", &task_def.family);
    output::kv("image", constants::TARGET_IMAGE);
    for name in &outcome.appended {
        output::success(&format!("added secret {}", name));
    }
    for name in &outcome.already_present {
        output::kv("kept", name);
    }
    output::success(&format!("wrote {}", out.display()));

    Ok(())
}
