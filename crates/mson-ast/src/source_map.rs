use core::ops::Range;

/// An ordered set of character ranges in the original source, attached to
/// AST nodes and carried through lowering/expansion so warnings and errors
/// can point back at the text that caused them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap(Vec<Range<usize>>);

impl SourceMap {
    pub fn empty() -> Self {
        SourceMap(Vec::new())
    }

    pub fn single(range: Range<usize>) -> Self {
        SourceMap(vec![range])
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate two source maps, preserving the order each range was
    /// recorded in. Lowering uses this when a description spans several
    /// `BlockDescription` sections (§4.4.2 step 5).
    pub fn join(&self, other: &SourceMap) -> SourceMap {
        let mut ranges = self.0.clone();
        ranges.extend(other.0.iter().cloned());
        SourceMap(ranges)
    }
}

impl From<Range<usize>> for SourceMap {
    fn from(range: Range<usize>) -> Self {
        SourceMap::single(range)
    }
}

impl FromIterator<Range<usize>> for SourceMap {
    fn from_iter<I: IntoIterator<Item = Range<usize>>>(iter: I) -> Self {
        SourceMap(iter.into_iter().collect())
    }
}
