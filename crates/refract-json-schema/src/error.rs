use thiserror::Error;

/// Failures during schema generation (§4.6). Generation otherwise always
/// completes deterministically (§8 invariant 5); the only way it can fail
/// is an un-mergeable `extend` chain reached through a mixin or named-type
/// occurrence, surfaced rather than silently dropped.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error(transparent)]
    Merge(#[from] refract_element::MergeError),
}
