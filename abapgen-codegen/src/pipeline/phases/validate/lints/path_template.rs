//! Lint for operation path templates.

use std::collections::HashSet;

use abapgen_core::to_snake_identifier;
use abapgen_descriptor::{Descriptor, Operation, Placement};

use super::super::Lint;
use crate::{
    naming::{Prefix, placeholders},
    pipeline::Diagnostic,
};

/// Lint that checks path placeholders before they are rewritten.
///
/// A malformed template is an error. A placeholder whose text also appears
/// outside its braces, or that no path parameter declares, is a warning:
/// the rewrite replaces every occurrence of the text, and the rewritten
/// placeholder will not line up with any parameter. The same holds for a
/// placeholder whose text occurs inside the rewritten form of an earlier one,
/// since placeholders are replaced one after another.
pub struct PathTemplateLint;

impl Lint for PathTemplateLint {
    fn name(&self) -> &'static str {
        "path-template"
    }

    fn description(&self) -> &'static str {
        "Check path placeholders are well-formed and match path parameters"
    }

    fn check(&self, descriptor: &Descriptor, diagnostics: &mut Vec<Diagnostic>) {
        for api in &descriptor.apis {
            for op in &api.operations {
                let location = format!("apis.{}.operations.{}", api.classname, op.operation_id);
                check_operation(op, &location, diagnostics);
            }
        }
    }
}

fn check_operation(op: &Operation, location: &str, diagnostics: &mut Vec<Diagnostic>) {
    let found = match placeholders(&op.path) {
        Ok(found) => found,
        Err(err) => {
            diagnostics.push(Diagnostic::error("validate", err.to_string()).at(location));
            return;
        }
    };

    let path_params: HashSet<&str> = op
        .all_params
        .iter()
        .filter(|param| param.placement() == Placement::Path)
        .map(|param| param.base_name.as_str())
        .collect();

    let mut seen = HashSet::new();
    let mut rewritten: Vec<(&str, String)> = Vec::new();
    for placeholder in found {
        if !seen.insert(placeholder.text) {
            continue;
        }

        if let Some((earlier, edited)) = rewritten
            .iter()
            .find(|(_, edited)| edited.contains(placeholder.text))
        {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "placeholder '{}' occurs in '{}', the rewritten form of '{}'",
                        placeholder.text, edited, earlier
                    ),
                )
                .at(location),
            );
        }

        let braced = format!("{{{}}}", placeholder.text);
        if op.path.matches(placeholder.text).count() > op.path.matches(&braced).count() {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "placeholder '{}' also appears outside braces in '{}'",
                        placeholder.text, op.path
                    ),
                )
                .at(location),
            );
        }

        if !path_params.contains(placeholder.text) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "placeholder '{}' has no matching path parameter",
                        placeholder.text
                    ),
                )
                .at(location),
            );
        }

        let edited = format!(
            "{}{}",
            Prefix::PathValue.as_str(),
            to_snake_identifier(placeholder.text)
        );
        rewritten.push((placeholder.text, edited));
    }
}
