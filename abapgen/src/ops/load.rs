//! Load operation - reads the descriptor and its configuration.

use std::path::Path;

use abapgen_descriptor::{CONFIG_FILE, Config, Descriptor, Result};

/// Read a descriptor and the config that applies to it.
///
/// An explicit config path must exist. Without one, `abapgen.toml` in the
/// working directory is used when present and defaults otherwise.
pub fn load(descriptor_path: &Path, config_path: Option<&Path>) -> Result<(Descriptor, Config)> {
    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default(CONFIG_FILE)?,
    };
    let descriptor = Descriptor::from_file(descriptor_path)?;
    Ok((descriptor, config))
}
