use crate::gf::Gf2Vector;
use std::collections::BTreeSet;

/// Accepted error vectors, deduplicated and kept in canonical (lexicographic) order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionSet {
    inner: BTreeSet<Gf2Vector>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `e` was already present.
    pub fn insert(&mut self, e: Gf2Vector) -> bool {
        self.inner.insert(e)
    }

    pub fn merge(&mut self, other: SolutionSet) {
        self.inner.extend(other.inner);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, e: &Gf2Vector) -> bool {
        self.inner.contains(e)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gf2Vector> {
        self.inner.iter()
    }

    pub fn into_vec(self) -> Vec<Gf2Vector> {
        self.inner.into_iter().collect()
    }
}

impl FromIterator<Gf2Vector> for SolutionSet {
    fn from_iter<I: IntoIterator<Item = Gf2Vector>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl IntoIterator for SolutionSet {
    type Item = Gf2Vector;
    type IntoIter = std::collections::btree_set::IntoIter<Gf2Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
