//! Taskprep - prepare an ECS task definition for re-registration.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── update        # The one operation: load, edit, project, write
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # Compiled-in target image and required secrets
//!     ├── descriptor    # Task definition model, load and write
//!     └── transform     # Image rewrite and secret merge
//! ```
//!
//! The tool reads `task-def.json` from the working directory, points the
//! first container at the staging image, merges the required secret
//! references into its secret list without duplicating names, strips the
//! read-only fields the registration API rejects, and writes the result
//! to `task-def-updated.json`.

pub mod cli;
pub mod core;
pub mod error;
