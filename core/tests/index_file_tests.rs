use std::fs;
use tse_core::builder::{build_index, MIN_WORD_LEN};
use tse_core::pagedir::{PageDir, SENTINEL};
use tse_core::persist::{load_index, save_index};

fn write_pages(dir: &std::path::Path, bodies: &[&str]) {
    fs::write(dir.join(SENTINEL), "").unwrap();
    for (i, body) in bodies.iter().enumerate() {
        let id = i + 1;
        fs::write(dir.join(id.to_string()), format!("http://example.com/{id}.html\n{}\n{body}\n", i % 3)).unwrap();
    }
}

#[test]
fn builds_from_page_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_pages(dir.path(), &[
        "<html><title>Search</title> Search engines index words</html>",
        "<p>An index maps words to pages. Words, words!</p>",
    ]);
    let idx = build_index(&PageDir::new(dir.path()), MIN_WORD_LEN);

    let words = idx.find("words").unwrap();
    assert_eq!((words.get(1), words.get(2)), (1, 3));
    assert_eq!(idx.find("search").unwrap().get(1), 2);
    assert!(idx.find("title").is_none());
    assert!(idx.find("html").is_none());
    for term in idx.terms() {
        assert!(term.len() >= MIN_WORD_LEN, "short term {term:?} indexed");
        assert_eq!(term, term.to_ascii_lowercase());
    }
}

#[test]
fn scan_stops_at_first_missing_id() {
    let dir = tempfile::tempdir().unwrap();
    write_pages(dir.path(), &["alpha", "bravo"]);
    fs::write(dir.path().join("4"), "http://example.com/4\n0\ncharlie\n").unwrap();
    let idx = build_index(&PageDir::new(dir.path()), MIN_WORD_LEN);
    assert!(idx.find("bravo").is_some());
    assert!(idx.find("charlie").is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    write_pages(dir.path(), &[
        "the quick brown fox jumps over the lazy dog",
        "the dog barks at the quick fox fox fox",
        "<b>nothing</b> in common",
    ]);
    let idx = build_index(&PageDir::new(dir.path()), MIN_WORD_LEN);
    let file = dir.path().join("index");
    save_index(&idx, &file).unwrap();
    let loaded = load_index(&file).unwrap();
    assert_eq!(loaded, idx);

    let again = dir.path().join("index.copy");
    save_index(&loaded, &again).unwrap();
    assert_eq!(fs::read_to_string(&file).unwrap(), fs::read_to_string(&again).unwrap());
}

#[test]
fn save_to_unwritable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let idx = tse_core::InvertedIndex::new();
    assert!(save_index(&idx, dir.path().join("missing").join("index")).is_err());
}
