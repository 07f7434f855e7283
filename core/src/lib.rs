//! Inverted index and boolean query engine over a crawler's page directory.

pub mod builder;
pub mod index;
pub mod pagedir;
pub mod persist;
pub mod posting;
pub mod query;
pub mod rank;
pub mod tokenizer;

pub use index::InvertedIndex;
pub use posting::{DocId, PostingList};
pub use query::{Query, QueryError};
pub use rank::{rank, Match};
