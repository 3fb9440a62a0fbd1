//! Top-level aggregator wiring the MSON AST, Refract element tree, and
//! draft-04 JSON Schema generation into a single pipeline entry point
//! (§2, §2.1). Grounded on `eure`'s own top crate, which likewise just
//! re-exports its sibling crates plus a thin assembly layer rather than
//! adding pipeline logic of its own.

mod pipeline;

pub use mson_ast::{DataStructure, DataStructures};
pub use refract_element::{Element, Registry, Value, Variant, Warning, WarningKind};
pub use refract_json_schema::{to_json_value, SchemaOptions};

pub use pipeline::{populate_registry, to_schemas, PipelineError, PipelineOutput};
