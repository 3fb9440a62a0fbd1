/// Selects which parts of an element `clone(flags)` deep-copies (§4.1.1).
/// Omitted parts are left at their default: empty maps, an unset value, and
/// the variant's reserved name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneFlags(u8);

impl CloneFlags {
    pub const META: CloneFlags = CloneFlags(1 << 0);
    pub const ATTRIBUTES: CloneFlags = CloneFlags(1 << 1);
    pub const VALUE: CloneFlags = CloneFlags(1 << 2);
    pub const ELEMENT_NAME: CloneFlags = CloneFlags(1 << 3);
    pub const META_ID: CloneFlags = CloneFlags(1 << 4);

    pub const ALL: CloneFlags = CloneFlags(
        Self::META.0 | Self::ATTRIBUTES.0 | Self::VALUE.0 | Self::ELEMENT_NAME.0 | Self::META_ID.0,
    );

    /// Everything but `meta.id`. Expansion uses this pervasively to copy an
    /// ancestor's shape while stripping its identity (§4.5).
    pub const NO_META_ID: CloneFlags = CloneFlags(Self::ALL.0 & !Self::META_ID.0);

    pub fn contains(self, other: CloneFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for CloneFlags {
    type Output = CloneFlags;

    fn bitor(self, rhs: CloneFlags) -> CloneFlags {
        CloneFlags(self.0 | rhs.0)
    }
}

impl core::ops::Sub for CloneFlags {
    type Output = CloneFlags;

    fn sub(self, rhs: CloneFlags) -> CloneFlags {
        CloneFlags(self.0 & !rhs.0)
    }
}
