//! Lint for operations and API groups that collapse to the same identifier.

use std::collections::HashMap;

use abapgen_core::to_snake_identifier;
use abapgen_descriptor::Descriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when two names would be edited into the same identifier.
///
/// Names are compared in their snake_case form, so `getPet` and `get_pet`
/// collide. Operations are compared within their API group; API groups are
/// compared with each other.
pub struct DuplicateOperationLint;

impl Lint for DuplicateOperationLint {
    fn name(&self) -> &'static str {
        "duplicate-operation"
    }

    fn description(&self) -> &'static str {
        "Detect operations and API groups whose identifiers collide"
    }

    fn check(&self, descriptor: &Descriptor, diagnostics: &mut Vec<Diagnostic>) {
        let mut classes: HashMap<String, &str> = HashMap::new();

        for api in &descriptor.apis {
            let normalized = to_snake_identifier(&api.classname);
            if let Some(first) = classes.get(&normalized) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "api group '{}' collides with '{}' as '{}'",
                            api.classname, first, normalized
                        ),
                    )
                    .at(format!("apis.{}", api.classname)),
                );
            } else {
                classes.insert(normalized, &api.classname);
            }

            let mut operations: HashMap<String, &str> = HashMap::new();
            for op in &api.operations {
                let normalized = to_snake_identifier(&op.operation_id);
                if let Some(first) = operations.get(&normalized) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "operation '{}' collides with '{}' as '{}'",
                                op.operation_id, first, normalized
                            ),
                        )
                        .at(format!("apis.{}.operations.{}", api.classname, op.operation_id)),
                    );
                } else {
                    operations.insert(normalized, &op.operation_id);
                }
            }
        }
    }
}
