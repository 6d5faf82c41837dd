//! Descriptor tree and configuration for the abapgen identifier engine.
//!
//! ```text
//! schema parser (JSON) → abapgen-descriptor (parsing) → abapgen-codegen (mangling) → templates
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod descriptor;
mod error;

pub use config::{CONFIG_FILE, Config, GeneratorConfig, NamingConfig};
pub use descriptor::{
    ApiGroup, Descriptor, Model, Operation, Parameter, Placement, Property, PropertyBag,
};
pub use error::{Error, Result, SourceContext};
