use tse_core::{rank, InvertedIndex, Match, PostingList, Query, QueryError};

fn list(pairs: &[(u32, u32)]) -> PostingList {
    pairs.iter().copied().collect()
}

fn abc_index() -> InvertedIndex {
    let mut idx = InvertedIndex::new();
    idx.insert("a", list(&[(1, 2), (2, 1)]));
    idx.insert("b", list(&[(1, 1)]));
    idx.insert("c", list(&[(2, 3)]));
    idx
}

fn search(idx: &InvertedIndex, line: &str) -> Vec<Match> {
    rank(&Query::parse(line).unwrap().evaluate(idx))
}

#[test]
fn and_binds_tighter_than_or() {
    let idx = abc_index();
    let result = Query::parse("a and b or c").unwrap().evaluate(&idx);
    assert_eq!(result.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 3)]);
    assert_eq!(
        rank(&result),
        vec![Match { doc_id: 2, score: 3 }, Match { doc_id: 1, score: 1 }]
    );
}

#[test]
fn adjacency_is_implicit_and() {
    let idx = abc_index();
    assert_eq!(search(&idx, "a b"), search(&idx, "a and b"));
    assert_eq!(search(&idx, "a b"), vec![Match { doc_id: 1, score: 1 }]);
}

#[test]
fn or_sums_scores() {
    let idx = abc_index();
    assert_eq!(
        search(&idx, "a or c"),
        vec![Match { doc_id: 2, score: 4 }, Match { doc_id: 1, score: 2 }]
    );
}

#[test]
fn unknown_term_alone_matches_nothing() {
    let idx = abc_index();
    assert!(search(&idx, "zebra").is_empty());
}

#[test]
fn unknown_term_empties_its_clause() {
    let idx = abc_index();
    assert!(search(&idx, "a and zebra").is_empty());
    assert!(search(&idx, "zebra and a").is_empty());
    assert_eq!(search(&idx, "a zebra or b"), vec![Match { doc_id: 1, score: 1 }]);
}

#[test]
fn evaluation_does_not_touch_the_index() {
    let idx = abc_index();
    let before = idx.clone();
    let _ = search(&idx, "a and b or c or a a");
    assert_eq!(idx, before);
}

#[test]
fn zero_cells_are_not_counted() {
    let idx = abc_index();
    let result = Query::parse("a c").unwrap().evaluate(&idx);
    assert_eq!(result.cells(), 2);
    assert_eq!(result.len(), 1);
    assert_eq!(rank(&result), vec![Match { doc_id: 2, score: 1 }]);
}

#[test]
fn syntax_errors_surface_from_parse() {
    assert_eq!(Query::parse(""), Err(QueryError::Empty));
    assert_eq!(Query::parse("or a"), Err(QueryError::LeadingOperator("or".into())));
    assert_eq!(Query::parse("a AND"), Err(QueryError::TrailingOperator("and".into())));
    assert_eq!(Query::parse("a!"), Err(QueryError::BadCharacter('!')));
}
