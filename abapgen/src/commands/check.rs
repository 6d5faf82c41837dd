use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the descriptor JSON exported by the schema parser
    pub descriptor: PathBuf,

    /// Path to abapgen.toml (defaults to ./abapgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (descriptor, config) =
            ops::load(&self.descriptor, self.config.as_deref()).unwrap_or_exit();

        let report = ops::check(descriptor, config, &self.descriptor);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
