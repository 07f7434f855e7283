//! Line-oriented index file: `<term> <doc> <count> <doc> <count> ...\n`.
//!
//! Loading is lenient so that hand-written or foreign index files still load:
//! a line stops at its first malformed pair and keeps what came before it.

use crate::{DocId, InvertedIndex, PostingList};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Capacity hint used when loading an index from disk.
pub const LOAD_CAPACITY: usize = 500;

pub fn save_index<P: AsRef<Path>>(index: &InvertedIndex, path: P) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("unable to open {} for writing", path.display()))?;
    let mut w = BufWriter::new(f);
    write_index(index, &mut w)?;
    w.flush()?;
    tracing::info!(path = %path.display(), terms = index.len(), "saved index");
    Ok(())
}

/// Terms are written in ascending order, documents ascending within a term.
pub fn write_index<W: Write>(index: &InvertedIndex, w: &mut W) -> Result<()> {
    for term in index.terms() {
        write!(w, "{term}")?;
        if let Some(postings) = index.find(term) {
            for (doc_id, count) in postings.iter() {
                write!(w, " {doc_id} {count}")?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

pub fn load_index<P: AsRef<Path>>(path: P) -> Result<InvertedIndex> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("could not open index file {}", path.display()))?;
    let index = read_index(BufReader::new(f))?;
    tracing::info!(path = %path.display(), terms = index.len(), "loaded index");
    Ok(index)
}

pub fn read_index<R: BufRead>(reader: R) -> Result<InvertedIndex> {
    let mut index = InvertedIndex::with_capacity(LOAD_CAPACITY);
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(term) = fields.next() else { continue };
        let postings = parse_pairs(fields).unwrap_or_else(|partial| {
            tracing::warn!(line = lineno + 1, term, "malformed posting pair, truncating line");
            partial
        });
        index.insert(term, postings);
    }
    Ok(index)
}

/// `Err` carries the pairs read before the first malformed one.
fn parse_pairs<'a, I: Iterator<Item = &'a str>>(mut fields: I) -> Result<PostingList, PostingList> {
    let mut postings = PostingList::new();
    while let Some(doc) = fields.next() {
        let doc_id = match doc.parse::<DocId>() {
            Ok(d) if d > 0 => d,
            _ => return Err(postings),
        };
        let Some(count) = fields.next().and_then(|c| c.parse::<u32>().ok()) else {
            return Err(postings);
        };
        postings.set(doc_id, count);
    }
    Ok(postings)
}
