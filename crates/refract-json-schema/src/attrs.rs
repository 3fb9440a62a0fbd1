use refract_element::{Element, Value};

/// The `typeAttributes` bits relevant to schema generation, read off an
/// element's own `typeAttributes` attribute (§4.4.4's array of names).
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeAttrs {
    pub required: bool,
    pub optional: bool,
    pub fixed: bool,
    pub fixed_type: bool,
    pub nullable: bool,
}

impl TypeAttrs {
    pub fn from_element(element: &Element) -> TypeAttrs {
        let mut ta = TypeAttrs::default();
        let Some(items) =
            element.attributes().get("typeAttributes").and_then(|e| e.value()).and_then(Value::as_array)
        else {
            return ta;
        };

        for item in items {
            match item.value().and_then(Value::as_string) {
                Some("required") => ta.required = true,
                Some("optional") => ta.optional = true,
                Some("fixed") => ta.fixed = true,
                Some("fixedType") => ta.fixed_type = true,
                Some("nullable") => ta.nullable = true,
                _ => {}
            }
        }

        ta
    }
}

/// The `fixed`/`fixedType` propagation context threaded through conversion
/// (§4.6 "fixed propagation"). Grounded precisely on the constructor-
/// argument chain in `JSONSchemaVisitor`: `fixed` carries forward by
/// OR-ing at every boundary, while `fixedType` resets to the next
/// element's own bit at a property-member or array-item boundary instead
/// of accumulating — the visitor never threads its own `fixedType` field
/// into a `MemberElement`'s or array item's renderer, only `fixed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCtx {
    pub fixed: bool,
    pub fixed_type: bool,
}

impl FixedCtx {
    pub const NONE: FixedCtx = FixedCtx { fixed: false, fixed_type: false };

    /// Fold in an element's own bits, OR-wise — used when a compound
    /// element (object, array) combines its own attributes with the
    /// context it was entered with (`if (IsTypeAttribute(e, "fixed")) fixed
    /// = true;` in the reference visitor's object/array handlers).
    pub fn combine(&self, ta: &TypeAttrs) -> FixedCtx {
        FixedCtx { fixed: self.fixed || ta.fixed, fixed_type: self.fixed_type || ta.fixed_type }
    }

    /// The context passed into a property member's value: `fixed` carries
    /// forward and ORs with the member's own bit; `fixedType` is read
    /// fresh from the member's own bit only, discarding whatever
    /// `fixedType` the caller was carrying. Note `optional` does not
    /// suppress propagation here — it only excludes the member from
    /// `required` (§4.6) — the source's own member visitor never
    /// consults `optional` before propagating `fixed`/`fixedType` into
    /// the value.
    pub fn for_member_value(&self, ta: &TypeAttrs) -> FixedCtx {
        FixedCtx { fixed: self.fixed || ta.fixed, fixed_type: ta.fixed_type }
    }

    /// The context passed into an array's items: only `fixed` carries
    /// forward; `fixedType` is always false for items.
    pub fn for_array_item(&self) -> FixedCtx {
        FixedCtx { fixed: self.fixed, fixed_type: false }
    }

    pub fn is_fixed_ish(&self) -> bool {
        self.fixed || self.fixed_type
    }
}
