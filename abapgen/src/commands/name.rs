use std::path::PathBuf;

use abapgen_codegen::NamingContext;
use abapgen_core::to_snake_identifier;
use abapgen_descriptor::{CONFIG_FILE, Config};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct NameCommand {
    /// Raw name to edit
    pub text: String,

    /// Role prefix prepended before length handling (e.g. iv_q_, ty_)
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Format as the global interface name instead
    #[arg(short, long, conflicts_with = "prefix")]
    pub global: bool,

    /// Print only the snake_case form, without length or reserved-word handling
    #[arg(long, conflicts_with_all = ["prefix", "global"])]
    pub snake: bool,

    /// Path to abapgen.toml (defaults to ./abapgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl NameCommand {
    pub fn run(&self) -> Result<()> {
        if self.snake {
            println!("{}", to_snake_identifier(&self.text));
            return Ok(());
        }

        let config = match &self.config {
            Some(path) => Config::from_file(path),
            None => Config::load_or_default(CONFIG_FILE),
        }
        .unwrap_or_exit();
        let mut naming = NamingContext::from_config(&config.naming);

        let name = if self.global {
            naming.format_global_name(&self.text)
        } else {
            naming.edit(&self.text, &self.prefix)
        };

        println!("{}", name);
        Ok(())
    }
}
