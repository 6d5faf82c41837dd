//! Lint for parameters with conflicting placement flags.

use abapgen_descriptor::Descriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a parameter is flagged for more than one of query,
/// path and body.
///
/// Only the first flag in that order takes effect.
pub struct ParameterPlacementLint;

impl Lint for ParameterPlacementLint {
    fn name(&self) -> &'static str {
        "parameter-placement"
    }

    fn description(&self) -> &'static str {
        "Detect parameters flagged for more than one placement"
    }

    fn check(&self, descriptor: &Descriptor, diagnostics: &mut Vec<Diagnostic>) {
        for api in &descriptor.apis {
            for op in &api.operations {
                for param in op.all_params.iter().filter(|p| p.placement_count() > 1) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "parameter '{}' has {} placement flags; treated as {:?}",
                                param.base_name,
                                param.placement_count(),
                                param.placement()
                            ),
                        )
                        .at(format!(
                            "apis.{}.operations.{}.params.{}",
                            api.classname, op.operation_id, param.base_name
                        )),
                    );
                }
            }
        }
    }
}
