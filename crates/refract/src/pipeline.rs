use mson_ast::DataStructure;
use refract_element::{Element, Registry, Warning};
use refract_json_schema::SchemaOptions;
use thiserror::Error;

/// Failures that can abort the full pipeline (§7). Registry construction
/// never aborts on its own — a name collision just loses the later
/// definition (§3.4.1) — so the only hard errors are a malformed AST node
/// reaching C4, a circular mixin reaching C5, or an un-mergeable `extend`
/// reaching C6.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Lowering(#[from] mson_lower::LoweringError),
    #[error(transparent)]
    Expand(#[from] refract_expand::ExpandError),
    #[error(transparent)]
    Schema(#[from] refract_json_schema::SchemaError),
}

/// Build a registry from a batch of top-level data structures, in document
/// order (§3.4.1): each structure is lowered once against the registry as
/// it stands so far and registered under its own name before the next one
/// is lowered. This is a thin collaborator, not one of the three core
/// passes — it exists only so callers who need a populated registry
/// without running a full conversion (e.g. to resolve a symbol defined
/// elsewhere in the same document) have a direct entry point, the way
/// `eure-schema::builder` assembles a `SchemaDocument` from a sequence of
/// declarations before anything consumes it. A structure whose lowering
/// fails is skipped rather than aborting the whole batch.
pub fn populate_registry(structures: &[DataStructure]) -> (Registry, Vec<Warning>) {
    let mut registry = Registry::new();
    let mut warnings = Vec::new();
    let _ = mson_lower::lower_data_structures(structures, &mut registry, &mut warnings);
    (registry, warnings)
}

/// Everything produced by running the full pipeline over a batch of
/// top-level data structures.
pub struct PipelineOutput {
    pub registry: Registry,
    pub warnings: Vec<Warning>,
    pub schemas: Vec<Element>,
}

/// Run the whole MSON → Refract → JSON Schema pipeline (§2's data-flow
/// line: "MSON AST + registry → (C4) → Refract tree → (C5) → expanded
/// Refract tree → (C6) → JSON Schema object") over a batch of top-level
/// data structures. Lowering registers each named structure as it's
/// produced, so a later structure can reference an earlier one; expansion
/// and schema generation then run against the now-complete registry,
/// independently per structure, matching §3.4.1's "the caller lowers every
/// top-level data structure first, then runs expansion/schema passes".
/// Grounded on `eure`'s top crate, which likewise just sequences its
/// sibling crates' entry points rather than adding pipeline logic of its
/// own.
pub fn to_schemas(
    structures: &[DataStructure],
    options: SchemaOptions,
) -> Result<PipelineOutput, PipelineError> {
    let mut registry = Registry::new();
    let mut warnings = Vec::new();
    let elements = mson_lower::lower_data_structures(structures, &mut registry, &mut warnings)?;

    let mut schemas = Vec::with_capacity(elements.len());
    for element in &elements {
        let expanded = refract_expand::expand(element, &registry)?;
        schemas.push(refract_json_schema::to_json_schema(&expanded, options)?);
    }

    Ok(PipelineOutput { registry, warnings, schemas })
}
