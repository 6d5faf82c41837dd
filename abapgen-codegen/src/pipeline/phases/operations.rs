//! Operations phase - mangles API groups, operations and their parameters.

use abapgen_descriptor::{ApiGroup, Operation, Placement};
use eyre::{Result, WrapErr};

use crate::{
    naming::Prefix,
    pipeline::{CompilationContext, Phase},
};

const PHASE: &str = "operations";

/// Data type of array parameters before their element type is known.
const UNTYPED_TABLE: &str = "STANDARD TABLE OF";
/// Table type used for array parameters in the generated interface.
const STRING_TABLE: &str = "ty_t_string";
/// Return type of operations without response media types.
const NO_RESPONSE_TYPE: &str = "string";

/// Phase that rewrites every API group in input order.
pub struct OperationsPhase;

impl Phase for OperationsPhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Mangle class, operation and parameter names, return types and paths"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut apis = std::mem::take(&mut ctx.descriptor.apis);
        let result = apis.iter_mut().try_for_each(|api| mangle_api(ctx, api));
        ctx.descriptor.apis = apis;
        result
    }
}

fn mangle_api(ctx: &mut CompilationContext, api: &mut ApiGroup) -> Result<()> {
    let location = format!("apis.{}", api.classname);
    api.classname = ctx.edit(PHASE, &location, &api.classname, Prefix::None);

    for op in &mut api.operations {
        let op_location = format!("{}.operations.{}", location, op.operation_id);
        mangle_operation(ctx, &op_location, op)
            .wrap_err_with(|| format!("failed to mangle operation at {}", op_location))?;
    }

    Ok(())
}

fn mangle_operation(ctx: &mut CompilationContext, location: &str, op: &mut Operation) -> Result<()> {
    op.operation_id = ctx.edit(PHASE, location, &op.operation_id, Prefix::None);
    op.base_name = ctx.edit(PHASE, location, &op.base_name, Prefix::None);

    op.return_type = Some(match op.return_type.as_deref() {
        Some(return_type) if op.has_produces && !return_type.is_empty() => {
            ctx.naming.intern(return_type, Prefix::Type)
        }
        _ => NO_RESPONSE_TYPE.to_string(),
    });

    for param in &mut op.all_params {
        let param_location = format!("{}.params.{}", location, param.base_name);
        param.param_name = ctx.edit(PHASE, &param_location, &param.base_name, Prefix::None);

        if param.data_type == UNTYPED_TABLE {
            param.data_type = STRING_TABLE.to_string();
        }

        let placement = param.placement();
        match Prefix::for_parameter(placement, param.is_array) {
            Some(prefix) => {
                param.base_name = ctx.edit(PHASE, &param_location, &param.base_name, prefix);
            }
            None if placement == Placement::Body && !param.data_type.is_empty() => {
                param.data_type = ctx.naming.intern(&param.data_type, Prefix::Type);
            }
            None => {}
        }
    }

    op.path = ctx.naming.rewrite_path(&op.path)?;
    Ok(())
}
