use crate::DocId;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Name of the marker file a crawler leaves in every directory it produces.
pub const SENTINEL: &str = ".crawler";

/// A fetched page as stored by the crawler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub depth: u32,
    pub body: String,
}

/// Directory of crawler output: one file per document, named by its id.
#[derive(Debug, Clone)]
pub struct PageDir {
    pub root: PathBuf,
}

impl PageDir {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    fn sentinel(&self) -> PathBuf { self.root.join(SENTINEL) }
    fn page(&self, doc_id: DocId) -> PathBuf { self.root.join(doc_id.to_string()) }

    /// True if the directory carries the crawler marker file.
    pub fn validate(&self) -> bool {
        self.sentinel().is_file()
    }

    /// Read document `doc_id`, or `None` if there is no such file.
    pub fn load(&self, doc_id: DocId) -> Result<Option<Page>> {
        let path = self.page(doc_id);
        let f = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("failed to open {}", path.display())),
        };
        let mut reader = BufReader::new(f);
        let url = read_line(&mut reader)?;
        let depth_line = read_line(&mut reader)?;
        let depth = depth_line.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(doc_id, depth = %depth_line, "unreadable depth, assuming 0");
            0
        });
        let mut body = String::new();
        reader.read_to_string(&mut body).with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(Page { url, depth, body }))
    }

    /// First line of document `doc_id`, or `None` if it cannot be read.
    pub fn url(&self, doc_id: DocId) -> Option<String> {
        let f = File::open(self.page(doc_id)).ok()?;
        let url = read_line(&mut BufReader::new(f)).ok()?;
        if url.is_empty() { None } else { Some(url) }
    }

    /// Pages in id order from 1, stopping at the first id that has no
    /// readable file.
    pub fn pages(&self) -> impl Iterator<Item = (DocId, Page)> + '_ {
        (1..).map_while(move |doc_id| match self.load(doc_id) {
            Ok(Some(page)) => Some((doc_id, page)),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(doc_id, error = %e, "stopping page scan");
                None
            }
        })
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
