//! # Rolo CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! Everything from `roloapp::api` inward is UI agnostic. The CLI layer owns
//! every user-facing concern: argument parsing, logging setup, dispatch,
//! error reporting and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
