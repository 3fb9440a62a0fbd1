//! Lowering of an MSON AST into a Refract element tree (C4, §4.4) — "the
//! heart of the system". Grounded throughout on `ElementData`/`Merge`/
//! `SaveValue`/`ElementInfoToElement`/`ExtractValueMember`/
//! `ExtractTypeSection`/`ExtractTypeDefinition`/`GetPropertyKey`/
//! `MsonMemberToRefract`/`MsonOneofToRefract`/`MsonMixinToRefract`/
//! `MsonElementToRefract`/`MSONToRefract` in
//! `examples/original_source/src/RefractDataStructure.cc`, collapsed from
//! that file's compile-time template family into runtime dispatch over
//! `refract_element::Variant` (Rust has no partial template
//! specialization to lean on).

mod attrs;
mod collector;
mod data_structure;
mod element_lower;
mod error;
mod oneof_mixin;
mod property;
#[cfg(test)]
mod test_support;
mod type_resolve;
mod type_section;
mod value_member;

pub use attrs::{check_clashes, lower_type_attributes};
pub use collector::{finalize, BucketValue, Collector, ElementInfo};
pub use data_structure::{lower_data_structure, lower_data_structures};
pub use element_lower::{lower_element, lower_property_member, lower_value_member};
pub use error::LoweringError;
pub use oneof_mixin::{lower_mixin, lower_one_of};
pub use property::lower_property_key;
pub use type_resolve::{
    disambiguate_member, is_named_type, nested_type_base, resolve_member_variant, resolve_type_specification,
    select_nested_type, variant_for,
};
pub use type_section::fill_type_section;
pub use value_member::{fill_nested_type_definitions, fill_values};
