//! Mangle command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a mangling run.
#[derive(Debug)]
pub struct MangleReport {
    /// Where the JSON is written; stdout when absent.
    pub output: Option<PathBuf>,
    /// The mangled descriptor.
    pub json: String,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Number of type codes assigned during the run.
    pub type_codes: usize,
}

impl Report for MangleReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.output {
            Some(path) => {
                out.key_value("wrote", &path.display().to_string());
                out.key_value("type codes", &self.type_codes.to_string());
            }
            None => out.preformatted(&self.json),
        }
    }
}
