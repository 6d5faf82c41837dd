//! Check operation - descriptor validation.

use std::path::Path;

use abapgen_codegen::{CompilationContext, Pipeline, Severity};
use abapgen_descriptor::{Config, Descriptor};

use super::describe;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the whole pipeline so that naming diagnostics are reported as well as
/// lint findings. A fatal failure is reported as an error instead of aborting.
pub fn check(descriptor: Descriptor, config: Config, descriptor_path: &Path) -> CheckReport {
    let mut ctx = CompilationContext::new(descriptor, config);
    let failure = Pipeline::new().run_with(&mut ctx).err();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = describe(diag);

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    // Lint failures are already listed; other failures are not
    if let Some(failure) = failure.filter(|_| !ctx.has_errors()) {
        errors.push(format!("{:#}", failure));
    }

    CheckReport {
        descriptor_path: descriptor_path.to_path_buf(),
        errors,
        warnings,
        infos,
    }
}
