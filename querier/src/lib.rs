use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;
use tse_core::pagedir::PageDir;
use tse_core::persist::load_index;
use tse_core::{rank, DocId, InvertedIndex, Query, QueryError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("the pageDirectory {0} is not a crawler produced directory")]
    InvalidPageDir(String),
    #[error("could not load index: {0:#}")]
    UnreadableIndex(anyhow::Error),
}

impl StartupError {
    pub fn exit_code(&self) -> u8 {
        match self {
            StartupError::InvalidPageDir(_) => 2,
            StartupError::UnreadableIndex(_) => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: u32,
    pub url: String,
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    query: &'a str,
    error: String,
}

/// A loaded index plus the page directory used to resolve document urls.
pub struct Querier {
    index: InvertedIndex,
    pages: PageDir,
}

impl Querier {
    pub fn new(index: InvertedIndex, pages: PageDir) -> Self {
        Self { index, pages }
    }

    /// Check the page directory, then load the index file.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(page_dir: P, index_file: Q) -> Result<Self, StartupError> {
        let pages = PageDir::new(page_dir.as_ref());
        if !pages.validate() {
            return Err(StartupError::InvalidPageDir(page_dir.as_ref().display().to_string()));
        }
        let index = load_index(index_file).map_err(StartupError::UnreadableIndex)?;
        Ok(Self::new(index, pages))
    }

    /// Run one query line. Matches whose page can no longer be read are left
    /// out of `results` but still counted in `total_hits`.
    pub fn search(&self, line: &str) -> Result<SearchResponse, QueryError> {
        let query = Query::parse(line)?;
        let matches = rank(&query.evaluate(&self.index));
        let total_hits = matches.len();
        let results = matches
            .into_iter()
            .filter_map(|m| match self.pages.url(m.doc_id) {
                Some(url) => Some(SearchHit { doc_id: m.doc_id, score: m.score, url }),
                None => {
                    tracing::warn!(doc_id = m.doc_id, "no readable page for match, skipping");
                    None
                }
            })
            .collect();
        tracing::debug!(query = line, total_hits, "query evaluated");
        Ok(SearchResponse { query: line.to_string(), total_hits, results })
    }

    /// Answer queries from `input`, one per line, until end of input. Syntax
    /// errors are reported and the loop moves on to the next line.
    /// Lines that are not valid UTF-8 are decoded lossily, so they fail
    /// validation like any other bad character.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W, format: OutputFormat, prompt: bool) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            if prompt {
                write!(out, "Query? ")?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let raw = String::from_utf8_lossy(&buf);
            let line = raw.trim_end_matches(['\n', '\r']);
            let result = self.search(line);
            match format {
                OutputFormat::Text => write_text(out, &result)?,
                OutputFormat::Json => write_json(out, line, &result)?,
            }
        }
        if prompt {
            writeln!(out)?;
        }
        Ok(())
    }
}

fn write_text<W: Write>(out: &mut W, result: &Result<SearchResponse, QueryError>) -> io::Result<()> {
    match result {
        Err(e) => writeln!(out, "Error: {e}"),
        Ok(resp) if resp.total_hits == 0 => writeln!(out, "No documents match."),
        Ok(resp) => {
            writeln!(out, "Matches {} documents (ranked):", resp.total_hits)?;
            for hit in &resp.results {
                writeln!(out, "score\t{} doc\t{}: {}", hit.score, hit.doc_id, hit.url)?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write>(out: &mut W, line: &str, result: &Result<SearchResponse, QueryError>) -> io::Result<()> {
    match result {
        Ok(resp) => serde_json::to_writer(&mut *out, resp)?,
        Err(e) => serde_json::to_writer(&mut *out, &ErrorResponse { query: line, error: e.to_string() })?,
    }
    writeln!(out)
}
