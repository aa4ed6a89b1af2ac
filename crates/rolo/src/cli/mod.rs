//! # CLI Layer
//!
//! This module is **one possible UI client** for rolo. It is the only place
//! that knows about stdout, stderr and exit codes.
//!
//! - [`setup`]: clap argument definitions
//! - [`commands`]: logging setup and dispatch to the API
//! - [`render`]: terminal output

mod commands;
mod render;
mod setup;

pub use commands::run;
