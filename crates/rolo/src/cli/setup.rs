use clap::{Args, Parser, Subcommand};
use roloapp::model::PersonInput;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rolo",
    bin_name = "rolo",
    version,
    disable_help_subcommand = true,
    about = "A small contact book for the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the data file (overrides the configured one)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a person
    Add(PersonArgs),

    /// Replace a person's details; the person is matched by full name
    Modify(PersonArgs),

    /// Delete a person by full name
    Delete {
        /// Full name of the person
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List persons whose name contains any of the keywords
    Find {
        /// Whole-word, case-sensitive keywords
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,

        /// Include private fields
        #[arg(long)]
        all: bool,
    },

    /// List all persons
    List {
        /// Include private fields
        #[arg(short, long)]
        all: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PersonArgs {
    /// Full name of the person
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,

    /// Phone number (digits only)
    #[arg(short, long)]
    pub phone: String,

    /// Mark the phone number as private
    #[arg(long)]
    pub private_phone: bool,

    /// Email address
    #[arg(short, long)]
    pub email: String,

    /// Mark the email address as private
    #[arg(long)]
    pub private_email: bool,

    /// Postal address
    #[arg(short, long)]
    pub address: String,

    /// Mark the address as private
    #[arg(long)]
    pub private_address: bool,

    /// Tag to attach (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

impl From<PersonArgs> for PersonInput {
    fn from(args: PersonArgs) -> Self {
        PersonInput::new(args.name.join(" "), args.phone, args.email, args.address)
            .with_privacy(args.private_phone, args.private_email, args.private_address)
            .with_tags(args.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_modify_with_unquoted_name() {
        let cli = Cli::try_parse_from([
            "rolo",
            "modify",
            "John",
            "Doe",
            "-p",
            "91234567",
            "-e",
            "johnd@gmail.com",
            "--private-email",
            "-a",
            "311, Clementi Ave 2",
            "-t",
            "friends",
            "-t",
            "owesMoney",
        ])
        .unwrap();

        let Commands::Modify(args) = cli.command else {
            panic!("Expected modify");
        };
        let input = PersonInput::from(args);
        assert_eq!(input.name, "John Doe");
        assert_eq!(input.phone, "91234567");
        assert!(input.is_email_private);
        assert!(!input.is_phone_private);
        assert_eq!(input.tags, vec!["friends", "owesMoney"]);
    }

    #[test]
    fn modify_requires_all_fields() {
        let result = Cli::try_parse_from(["rolo", "modify", "John Doe", "-p", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rolo", "list", "--all", "-v", "--data", "x.json"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data, Some(PathBuf::from("x.json")));
        assert!(matches!(cli.command, Commands::List { all: true }));
    }
}
