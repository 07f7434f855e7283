use std::collections::BTreeMap;

pub type DocId = u32;

/// Occurrence counts of one term, keyed by document.
///
/// A cell may hold a count of zero (intersection leaves those behind); such a
/// cell means "absent" and is ignored by [`PostingList::len`] and by ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    counts: BTreeMap<DocId, u32>,
}

impl PostingList {
    pub fn new() -> Self { Self::default() }

    /// Count for `doc_id`, 0 if absent.
    pub fn get(&self, doc_id: DocId) -> u32 {
        self.counts.get(&doc_id).copied().unwrap_or(0)
    }

    /// Insert or overwrite the count for `doc_id`.
    pub fn set(&mut self, doc_id: DocId, count: u32) {
        self.counts.insert(doc_id, count);
    }

    /// Bump the count for `doc_id` by one, starting from 0.
    pub fn add(&mut self, doc_id: DocId) {
        let c = self.counts.entry(doc_id).or_insert(0);
        *c = c.saturating_add(1);
    }

    /// Every stored cell, zero counts included, in ascending doc order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, u32)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    pub fn for_each<F: FnMut(DocId, u32)>(&self, mut visit: F) {
        for (doc_id, count) in self.iter() {
            visit(doc_id, count);
        }
    }

    /// Number of documents with a non-zero count.
    pub fn len(&self) -> usize {
        self.counts.values().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Number of stored cells, zero counts included.
    pub fn cells(&self) -> usize { self.counts.len() }

    /// Keeps only `self`'s documents, each with the smaller of the two counts.
    /// Documents missing from `other` stay behind with a count of 0.
    pub fn intersect(&self, other: &PostingList) -> PostingList {
        let mut out = PostingList::new();
        self.for_each(|doc_id, count| out.set(doc_id, count.min(other.get(doc_id))));
        out
    }

    /// Sum of both lists' counts over every document in either.
    pub fn union(&self, other: &PostingList) -> PostingList {
        let mut out = self.clone();
        other.for_each(|doc_id, count| {
            let cur = out.get(doc_id);
            out.set(doc_id, cur.saturating_add(count));
        });
        out
    }
}

impl FromIterator<(DocId, u32)> for PostingList {
    fn from_iter<I: IntoIterator<Item = (DocId, u32)>>(iter: I) -> Self {
        Self { counts: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(pairs: &[(DocId, u32)]) -> PostingList {
        pairs.iter().copied().collect()
    }

    #[test]
    fn get_defaults_to_zero() {
        let p = list(&[(1, 2)]);
        assert_eq!(p.get(1), 2);
        assert_eq!(p.get(7), 0);
    }

    #[test]
    fn add_starts_from_zero() {
        let mut p = PostingList::new();
        p.add(4);
        p.add(4);
        p.add(9);
        assert_eq!(p.get(4), 2);
        assert_eq!(p.get(9), 1);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn intersect_keeps_left_keys_with_min() {
        let a = list(&[(1, 2), (2, 1)]);
        let b = list(&[(1, 1), (3, 5)]);
        let r = a.intersect(&b);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 0)]);
        assert_eq!(r.len(), 1);
        assert_eq!(r.cells(), 2);
    }

    #[test]
    fn intersect_with_self_is_identity() {
        let p = list(&[(1, 3), (5, 1), (8, 4)]);
        assert_eq!(p.intersect(&p), p);
    }

    #[test]
    fn union_sums_counts() {
        let a = list(&[(1, 1), (2, 0)]);
        let b = list(&[(2, 3), (4, 2)]);
        let r = a.union(&b);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 3), (4, 2)]);
    }

    #[test]
    fn union_is_commutative() {
        let a = list(&[(1, 4), (3, 2), (6, 1)]);
        let b = list(&[(3, 5), (6, 0), (9, 7)]);
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn operations_leave_inputs_untouched() {
        let a = list(&[(1, 2)]);
        let b = list(&[(2, 2)]);
        let _ = a.intersect(&b);
        let _ = a.union(&b);
        assert_eq!(a, list(&[(1, 2)]));
        assert_eq!(b, list(&[(2, 2)]));
    }
}
