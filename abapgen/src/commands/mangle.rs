use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct MangleCommand {
    /// Path to the descriptor JSON exported by the schema parser
    pub descriptor: PathBuf,

    /// Path to abapgen.toml (defaults to ./abapgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the mangled descriptor here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl MangleCommand {
    pub fn run(&self) -> Result<()> {
        let (descriptor, config) =
            ops::load(&self.descriptor, self.config.as_deref()).unwrap_or_exit();

        let report = ops::mangle(descriptor, config, self.output.clone())?;

        if let Some(path) = &report.output {
            fs::write(path, &report.json)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        }

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
