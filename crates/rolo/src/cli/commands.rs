use super::render::{print_messages, print_records};
use super::setup::{Cli, Commands};
use clap::Parser;
use roloapp::commands::{CmdResult, MessageLevel};
use roloapp::error::{Result, RoloError};
use roloapp::init::initialize;
use roloapp::model::PersonInput;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    let show_private = ctx.config.show_private;
    debug!(command = ?cli.command, "dispatching");

    let (result, reveal) = match cli.command {
        Commands::Add(args) => (ctx.api.add_person(&PersonInput::from(args))?, false),
        Commands::Modify(args) => (ctx.api.modify_person(&PersonInput::from(args))?, false),
        Commands::Delete { name } => (ctx.api.delete_person(&name.join(" "))?, false),
        Commands::Find { keywords, all } => (
            ctx.api.find_persons(keywords.as_slice())?,
            all || show_private,
        ),
        Commands::List { all } => (ctx.api.list_persons()?, all || show_private),
    };

    print_records(&result.listed_records, reveal);
    finish(result)
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Prints non-error messages; error-level messages become the process error.
fn finish(result: CmdResult) -> Result<()> {
    let (errors, messages): (Vec<_>, Vec<_>) = result
        .messages
        .into_iter()
        .partition(|m| m.level == MessageLevel::Error);
    print_messages(&messages);

    if errors.is_empty() {
        return Ok(());
    }
    let text = errors
        .into_iter()
        .map(|m| m.content)
        .collect::<Vec<_>>()
        .join("\n");
    Err(RoloError::Api(text))
}
