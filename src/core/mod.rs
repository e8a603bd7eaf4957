//! Core library components.
//!
//! This module contains the reusable logic for loading a task definition,
//! applying the deployment edits, and writing the registration input.

pub mod constants;
pub mod descriptor;
pub mod transform;
