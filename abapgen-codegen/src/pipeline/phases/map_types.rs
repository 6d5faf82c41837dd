//! Map-types phase - translates schema type names into ABAP types.

use abapgen_core::{AbapTypeMapper, TypeMapper};
use eyre::Result;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that runs every parameter and property `data_type` through the
/// ABAP type table.
///
/// Names the table does not know, such as model references, are kept as-is.
/// Already-mapped types are not keys of the table, so running the phase on a
/// pre-mapped descriptor changes nothing. `complex_type` is left alone; the
/// models phase handles it.
pub struct MapTypesPhase;

impl Phase for MapTypesPhase {
    fn name(&self) -> &'static str {
        "map-types"
    }

    fn description(&self) -> &'static str {
        "Map schema types to ABAP types"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mapper = AbapTypeMapper;
        let mut mapped = 0;

        let params = ctx
            .descriptor
            .apis
            .iter_mut()
            .flat_map(|api| api.operations.iter_mut())
            .flat_map(|op| op.all_params.iter_mut())
            .map(|param| &mut param.data_type);
        let vars = ctx
            .descriptor
            .models
            .iter_mut()
            .flat_map(|model| model.vars.iter_mut())
            .map(|var| &mut var.data_type);

        for data_type in params.chain(vars) {
            if let Some(abap_type) = mapper.map_type(data_type) {
                *data_type = abap_type.to_string();
                mapped += 1;
            }
        }

        log::debug!("mapped {} {} type(s)", mapped, mapper.language());
        Ok(())
    }
}
