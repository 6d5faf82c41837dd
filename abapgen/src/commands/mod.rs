mod check;
mod completions;
mod mangle;
mod name;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use log::LevelFilter;
use mangle::MangleCommand;
use name::NameCommand;

/// Extension trait for exiting on descriptor and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for abapgen_descriptor::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "abapgen")]
#[command(version)]
#[command(about = "Turn OpenAPI descriptor names into valid ABAP identifiers")]
pub(crate) struct Cli {
    /// Print debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn init_logging(&self) {
        let level = if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Mangle(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Name(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Mangle a descriptor and write the result as JSON
    Mangle(MangleCommand),

    /// Run the pipeline and report diagnostics without writing output
    Check(CheckCommand),

    /// Edit a single name in a fresh naming context
    Name(NameCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
