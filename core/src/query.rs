//! Boolean keyword queries.
//!
//! A query is a flat run of terms joined by `and` / `or`; adjacent terms are an
//! implicit `and`, and `and` binds tighter than `or`. Evaluation folds left to
//! right: terms intersect into the current clause, and each `or` unions that
//! clause into the running total.

use crate::tokenizer::normalize;
use crate::{InvertedIndex, PostingList};
use thiserror::Error;

pub const AND: &str = "and";
pub const OR: &str = "or";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("empty query")]
    Empty,
    #[error("bad character '{0}' in query")]
    BadCharacter(char),
    #[error("'{0}' cannot be first")]
    LeadingOperator(String),
    #[error("'{0}' cannot be last")]
    TrailingOperator(String),
    #[error("'{0}' and '{1}' cannot be adjacent")]
    AdjacentOperators(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Term(String),
    And,
    Or,
}

fn is_operator(token: &str) -> bool {
    token == AND || token == OR
}

/// Split on runs of whitespace. No quoting or escaping.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Syntax check of already lowercased tokens. Terms unknown to the index are
/// fine here; they just match nothing.
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Result<(), QueryError> {
    if tokens.is_empty() {
        return Err(QueryError::Empty);
    }
    let last = tokens.len() - 1;
    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if let Some(c) = token.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(QueryError::BadCharacter(c));
        }
        if is_operator(token) {
            if i == 0 {
                return Err(QueryError::LeadingOperator(token.to_string()));
            }
            if i == last {
                return Err(QueryError::TrailingOperator(token.to_string()));
            }
            let prev = tokens[i - 1].as_ref();
            if is_operator(prev) {
                return Err(QueryError::AdjacentOperators(prev.to_string(), token.to_string()));
            }
        }
    }
    Ok(())
}

/// A validated query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<Token>,
}

impl Query {
    /// Lowercase, tokenize and validate one query line.
    pub fn parse(line: &str) -> Result<Self, QueryError> {
        let line = normalize(line);
        let raw = tokenize(&line);
        validate(&raw)?;
        let tokens = raw
            .into_iter()
            .map(|t| match t {
                AND => Token::And,
                OR => Token::Or,
                term => Token::Term(term.to_string()),
            })
            .collect();
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] { &self.tokens }

    /// Documents matching the query with their combined counts. Cells with a
    /// count of 0 may be present and mean "no match".
    pub fn evaluate(&self, index: &InvertedIndex) -> PostingList {
        let mut total: Option<PostingList> = None;
        let mut clause: Option<PostingList> = None;
        for token in &self.tokens {
            match token {
                Token::And => {}
                Token::Or => total = fold(total, clause.take()),
                Token::Term(term) => {
                    clause = Some(match (clause.take(), index.find(term)) {
                        (None, Some(postings)) => postings.clone(),
                        (None, None) => PostingList::new(),
                        (Some(acc), Some(postings)) => acc.intersect(postings),
                        (Some(acc), None) => acc.intersect(&PostingList::new()),
                    });
                }
            }
        }
        fold(total, clause).unwrap_or_default()
    }
}

fn fold(total: Option<PostingList>, clause: Option<PostingList>) -> Option<PostingList> {
    match (total, clause) {
        (None, clause) => clause,
        (Some(total), None) => Some(total),
        (Some(total), Some(clause)) => Some(total.union(&clause)),
    }
}
