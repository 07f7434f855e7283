use crate::posting::PostingList;
use std::collections::HashMap;

/// Term to posting list mapping.
///
/// Lookups are exact: callers normalize terms before calling [`InvertedIndex::find`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: HashMap<String, PostingList>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Empty index sized for roughly `terms` entries.
    pub fn with_capacity(terms: usize) -> Self {
        Self { postings: HashMap::with_capacity(terms) }
    }

    /// Store `postings` under `term`, replacing whatever was there.
    /// Returns false and stores nothing when `term` is empty.
    pub fn insert(&mut self, term: &str, postings: PostingList) -> bool {
        if term.is_empty() {
            return false;
        }
        self.postings.insert(term.to_string(), postings);
        true
    }

    pub fn find(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Posting list for `term`, created empty on first use.
    pub fn find_or_insert(&mut self, term: &str) -> &mut PostingList {
        self.postings.entry(term.to_string()).or_default()
    }

    pub fn len(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    /// Terms in ascending order.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }
}
