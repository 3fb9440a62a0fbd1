//! Node types of the MSON AST consumed by the Refract lowering pipeline.
//!
//! This crate has no parser. It models the shapes `mson-lower` pattern
//! matches against; something upstream (out of scope here) is expected to
//! turn Markdown into these structs.

mod source_map;

pub use source_map::SourceMap;

use thisisplural::Plural;

/// A named, top-level MSON declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct DataStructure {
    pub name: Identifier,
    pub element: Element,
}

/// An identifier with its own source location, e.g. a data structure's name
/// or a property member's key literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub literal: String,
    pub source_map: SourceMap,
}

/// The base MSON type name a node declares or infers, see `BaseTypeName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseTypeName {
    Boolean,
    Number,
    String,
    Array,
    Enum,
    Object,
    Undefined,
}

/// A single MSON node: a value member, property member, or a group (one-of
/// alternative, mixin, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub source_map: SourceMap,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Property(Box<PropertyMember>),
    Value(Box<ValueMember>),
    Mixin(Box<Mixin>),
    OneOf(Box<OneOf>),
}

/// A `key: value` member of an object, e.g. `city: Praha (string)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMember {
    pub keys: PropertyKeys,
    pub value: ValueMember,
}

/// One or more key candidates for a property member, with the `variable`
/// modifier per key tracked separately so `mson-lower` can diagnose
/// `BadVariableKey`/multiple-variable situations per §4.4.3.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyKeys(pub Vec<PropertyKey>);

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyKey {
    pub identifier: Identifier,
    pub variable: bool,
    /// The variable's own declared type, e.g. the `(Name)` in `*(Name)*:
    /// ...`. Only meaningful when `variable` is set; `None` defaults to
    /// string (§4.4.3).
    pub variable_type: Option<TypeSpecification>,
}

/// A bare value member, e.g. an array item or the subject of a top-level
/// data structure.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueMember {
    pub type_definition: TypeDefinition,
    pub value_definition: Option<ValueDefinition>,
    pub sections: Vec<TypeSection>,
}

/// The declared type of a member: a base type name, an optional symbol
/// naming a registered type, and any nested type parameters
/// (`enum[T1, T2]`, `array[T]`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition {
    pub specification: TypeSpecification,
    pub attributes: TypeAttributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpecification {
    pub base_name: BaseTypeName,
    pub symbol: Option<String>,
    pub nested_types: Vec<String>,
}

/// One or more literal values attached directly to a value member, e.g.
/// `Praha` in `city: Praha (string)`, or `1, 2, 3` for an array/enum.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDefinition {
    pub values: Vec<MsonValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MsonValue {
    pub literal: String,
    pub variable: bool,
    pub nested_type: Option<TypeSpecification>,
    pub source_map: SourceMap,
}

/// A bitset of the type attribute keywords recognized between parentheses
/// after a type name, e.g. `(string, required, fixed)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeAttributes(u8);

impl TypeAttributes {
    pub const REQUIRED: TypeAttributes = TypeAttributes(1 << 0);
    pub const OPTIONAL: TypeAttributes = TypeAttributes(1 << 1);
    pub const FIXED: TypeAttributes = TypeAttributes(1 << 2);
    pub const FIXED_TYPE: TypeAttributes = TypeAttributes(1 << 3);
    pub const NULLABLE: TypeAttributes = TypeAttributes(1 << 4);
    pub const DEFAULT: TypeAttributes = TypeAttributes(1 << 5);
    pub const SAMPLE: TypeAttributes = TypeAttributes(1 << 6);

    pub fn empty() -> Self {
        TypeAttributes(0)
    }

    pub fn contains(self, other: TypeAttributes) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: TypeAttributes) {
        self.0 |= other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for TypeAttributes {
    type Output = TypeAttributes;

    fn bitor(self, rhs: TypeAttributes) -> TypeAttributes {
        TypeAttributes(self.0 | rhs.0)
    }
}

/// A nested block under a value member, classified by §4.4.2 step 3.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSection {
    pub class: TypeSectionClass,
    pub source_map: SourceMap,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeSectionClass {
    Member(Vec<Element>),
    Sample(Vec<MsonValue>),
    Default(Vec<MsonValue>),
    BlockDescription(String),
    /// A class the lowering does not recognize; carries the name it saw so
    /// `mson-lower` can report `UnknownSection` with useful context.
    Unknown(String),
}

/// `- Include OtherType` — lowers to a `ref` with `path = "content"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixin {
    pub symbol: String,
    pub source_map: SourceMap,
}

/// `- One Of` — a set of mutually exclusive alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    pub alternatives: Vec<OneOfAlternative>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OneOfAlternative {
    pub kind: OneOfAlternativeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OneOfAlternativeKind {
    /// A group alternative: its children contribute directly into the
    /// option's value.
    Group(Vec<Element>),
    /// A single lowered element.
    Element(Box<Element>),
}

/// A batch of top-level data structures, lowered together so forward
/// references within the batch resolve once every entry is present (see
/// `SPEC_FULL.md` §3.4.1).
#[derive(Debug, Clone, Default, Plural, PartialEq)]
pub struct DataStructures(Vec<DataStructure>);
