//! `alias-d`: edit the aliases and functions in `~/.alias-d/dotfile.zsh`.

mod commands;

use alias_d::Kind;
use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    config::{cmd_config, ConfigAction},
    entries,
    integration::{cmd_integration, IntegrationAction},
};

#[derive(Parser)]
#[command(name = "alias-d", version, about = "Manage zsh aliases and functions in a sourced dotfile")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every alias and function with its number and state
    List,

    /// Print the full definition of an entry
    Show {
        /// Entry number (from `list`) or defined name
        entry: String,
    },

    /// Append a new enabled entry
    Add {
        /// Definition, e.g. "alias ll='ls -la'"; use - to read it from stdin
        body: String,

        /// The body is a multi-line function rather than an alias
        #[arg(short, long)]
        function: bool,
    },

    /// Delete an entry
    Remove {
        /// Entry number (from `list`) or defined name
        entry: String,
    },

    /// Uncomment an entry
    Enable {
        /// Entry number (from `list`) or defined name
        entry: String,
    },

    /// Comment out an entry without deleting it
    Disable {
        /// Entry number (from `list`) or defined name
        entry: String,
    },

    /// Replace the definition of an entry
    Edit {
        /// Entry number (from `list`) or defined name
        entry: String,

        /// New definition; use - to read it from stdin
        body: String,

        /// Change the entry kind (alias or function)
        #[arg(long)]
        kind: Option<Kind>,
    },

    /// Print the dotfile path
    Path,

    /// Manage sourcing of the dotfile from ~/.zshrc
    Integration {
        #[command(subcommand)]
        action: IntegrationAction,
    },

    /// Manage alias-d configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::List => entries::cmd_list()?,

        Commands::Show { entry } => entries::cmd_show(&entry)?,

        Commands::Add { body, function } => entries::cmd_add(body, function)?,

        Commands::Remove { entry } => entries::cmd_remove(&entry)?,

        Commands::Enable { entry } => entries::cmd_set_active(&entry, true)?,

        Commands::Disable { entry } => entries::cmd_set_active(&entry, false)?,

        Commands::Edit { entry, body, kind } => entries::cmd_edit(&entry, body, kind)?,

        Commands::Path => entries::cmd_path()?,

        Commands::Integration { action } => cmd_integration(action)?,

        Commands::Config { action } => cmd_config(action)?,
    }

    Ok(())
}
