use thiserror::Error;

/// Failures the expansion pass treats as hard errors rather than warnings
/// (§4.5, §7). Everything else the original visitor handles — an unknown
/// named type, an unresolved `ref` symbol — degrades to cloning the
/// offending subtree unchanged instead of aborting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("element '{0}' circularly references itself by mixin")]
    CircularMixin(String),
}
