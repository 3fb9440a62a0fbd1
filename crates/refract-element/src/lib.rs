//! The Refract element tree (§3, §4.1–§4.3): the tagged-variant node type,
//! its ordered `meta`/`attributes` maps, the named-type registry, and the
//! element factory.

mod clone_flags;
mod element;
mod factory;
mod literal;
mod merge;
mod registry;
mod value;
mod variant;
mod warning;

pub use clone_flags::CloneFlags;
pub use element::{AttrMap, Element};
pub use factory::{create, CreateMode};
pub use literal::{parse_bool, parse_number, parse_string};
pub use merge::{merge_extend, MergeError};
pub use registry::{Registry, RegistryError};
pub use value::Value;
pub use variant::{is_reserved, Variant};
pub use warning::{Warning, WarningKind};
