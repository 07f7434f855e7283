use crate::{DocId, PostingList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub doc_id: DocId,
    pub score: u32,
}

/// Non-zero entries of `result`, best score first, ties by ascending doc id.
pub fn rank(result: &PostingList) -> Vec<Match> {
    let mut matches: Vec<Match> = result
        .iter()
        .filter(|&(_, score)| score > 0)
        .map(|(doc_id, score)| Match { doc_id, score })
        .collect();
    matches.sort_by(|a, b| b.score.cmp(&a.score).then(a.doc_id.cmp(&b.doc_id)));
    matches
}
