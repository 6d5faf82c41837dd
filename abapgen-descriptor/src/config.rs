//! `abapgen.toml` generator configuration.

use std::{collections::HashMap, path::Path, str::FromStr};

use abapgen_core::SUFFIX_WIDTH;
use serde::Deserialize;

use crate::{
    Error, Result,
    error::{SourceContext, find_key_span},
};

/// Default name of the configuration file.
pub const CONFIG_FILE: &str = "abapgen.toml";

/// Root of `abapgen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub naming: NamingConfig,
}

/// Run-wide generator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Application name; takes precedence over `appName` in the descriptor
    pub app_name: Option<String>,

    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            api_version: default_api_version(),
        }
    }
}

fn default_api_version() -> String {
    "1.0.0".to_string()
}

/// Identifier length limits and reserved words.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    /// Longest identifier kept as-is
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Prefix length used as the collision bucket key
    #[serde(default = "default_trim_length")]
    pub trim_length: usize,

    /// Cap for the interface name
    #[serde(default = "default_global_max_length")]
    pub global_max_length: usize,

    /// Cap for property descriptions
    #[serde(default = "default_description_max_length")]
    pub description_max_length: usize,

    /// Additional words to escape on top of the ABAP keyword list
    #[serde(default)]
    pub reserved_words: Vec<String>,

    /// Replacement spellings that bypass the underscore escape
    #[serde(default)]
    pub reserved_mappings: HashMap<String, String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            trim_length: default_trim_length(),
            global_max_length: default_global_max_length(),
            description_max_length: default_description_max_length(),
            reserved_words: Vec::new(),
            reserved_mappings: HashMap::new(),
        }
    }
}

fn default_max_length() -> usize {
    30
}

fn default_trim_length() -> usize {
    27
}

fn default_global_max_length() -> usize {
    26
}

fn default_description_max_length() -> usize {
    60
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse an abapgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load the config if the file exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("no config at '{}', using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse abapgen.toml content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let mut config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
        config.naming.validate(&source_ctx)?;
        config.naming.normalize();
        Ok(config)
    }
}

impl NamingConfig {
    /// Check that the limits can hold the identifiers they describe.
    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let src = ctx.src();

        if self.trim_length == 0 {
            return Err(ctx.validation_error_at(
                "trim_length must be at least 1",
                find_key_span(src, "trim_length"),
            ));
        }

        if self.trim_length + SUFFIX_WIDTH > self.max_length {
            return Err(ctx.validation_error_at(
                format!(
                    "trim_length {} plus the {}-digit suffix exceeds max_length {}",
                    self.trim_length, SUFFIX_WIDTH, self.max_length
                ),
                find_key_span(src, "trim_length").or_else(|| find_key_span(src, "max_length")),
            ));
        }

        if self.global_max_length == 0 {
            return Err(ctx.validation_error_at(
                "global_max_length must be at least 1",
                find_key_span(src, "global_max_length"),
            ));
        }

        if self.description_max_length == 0 {
            return Err(ctx.validation_error_at(
                "description_max_length must be at least 1",
                find_key_span(src, "description_max_length"),
            ));
        }

        let mut words: Vec<&String> = self.reserved_mappings.keys().collect();
        words.sort();
        let mut lowered: HashMap<String, &str> = HashMap::new();
        for word in words {
            if self.reserved_mappings[word].is_empty() {
                return Err(ctx.validation_error_at(
                    format!("reserved mapping for '{}' is empty", word),
                    find_key_span(src, word),
                ));
            }
            if let Some(previous) = lowered.insert(word.to_lowercase(), word) {
                return Err(ctx.validation_error_at(
                    format!(
                        "reserved mappings '{}' and '{}' differ only in case",
                        previous, word
                    ),
                    find_key_span(src, word),
                ));
            }
        }

        Ok(())
    }

    /// Reserved words are compared against lowercased identifiers.
    fn normalize(&mut self) {
        for word in &mut self.reserved_words {
            *word = word.to_lowercase();
        }
        self.reserved_mappings = std::mem::take(&mut self.reserved_mappings)
            .into_iter()
            .map(|(word, replacement)| (word.to_lowercase(), replacement))
            .collect();
    }
}
