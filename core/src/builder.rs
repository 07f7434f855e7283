use crate::pagedir::PageDir;
use crate::tokenizer::{normalize, words};
use crate::{DocId, InvertedIndex};

/// Words shorter than this are never indexed.
pub const MIN_WORD_LEN: usize = 3;

/// Capacity hint for a freshly built index.
pub const BUILD_CAPACITY: usize = 1000;

/// Fills an [`InvertedIndex`] from per-document word streams.
pub struct IndexBuilder {
    index: InvertedIndex,
    min_word_len: usize,
    num_docs: u32,
}

impl Default for IndexBuilder {
    fn default() -> Self { Self::new() }
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::with_min_word_len(MIN_WORD_LEN)
    }

    /// Builder with a custom word length cutoff. Values below
    /// [`MIN_WORD_LEN`] are raised to it.
    pub fn with_min_word_len(min_word_len: usize) -> Self {
        if min_word_len < MIN_WORD_LEN {
            tracing::warn!(requested = min_word_len, used = MIN_WORD_LEN, "minimum word length too small");
        }
        let min_word_len = min_word_len.max(MIN_WORD_LEN);
        Self { index: InvertedIndex::with_capacity(BUILD_CAPACITY), min_word_len, num_docs: 0 }
    }

    /// Count every long-enough word of `doc_id` under its normalized term.
    pub fn add_document<I, S>(&mut self, doc_id: DocId, raw_words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = 0usize;
        for word in raw_words {
            let word = word.as_ref();
            if word.len() < self.min_word_len {
                continue;
            }
            self.index.find_or_insert(&normalize(word)).add(doc_id);
            kept += 1;
        }
        self.num_docs += 1;
        tracing::debug!(doc_id, words = kept, "indexed document");
    }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn finish(self) -> InvertedIndex { self.index }
}

/// Index every page of `pages`, scanning ids from 1 up to the first gap.
pub fn build_index(pages: &PageDir, min_word_len: usize) -> InvertedIndex {
    let mut builder = IndexBuilder::with_min_word_len(min_word_len);
    for (doc_id, page) in pages.pages() {
        builder.add_document(doc_id, words(&page.body));
    }
    tracing::info!(num_docs = builder.num_docs(), num_terms = builder.index.len(), "ingested documents");
    builder.finish()
}
