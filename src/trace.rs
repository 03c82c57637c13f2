//! Reference trace loading.
//!
//! Traces are plain text: page numbers separated by whitespace and/or
//! commas, e.g. `1, 2, 3, 4, 1, 2`. Lines starting with `#` are comments.

use std::fs;
use std::ops::Deref;
use std::path::Path;

use tracing::debug;

use crate::common::config::sample_pages;
use crate::common::{Error, PageId, Result};

/// An ordered, read-only sequence of page references.
///
/// Derefs to `[PageId]`, so it can be passed anywhere a trace slice is
/// expected.
///
/// # Example
/// ```
/// use pagesim::{PageId, Trace};
///
/// let trace = Trace::parse("1, 2 3\n1").unwrap();
/// assert_eq!(trace.len(), 4);
/// assert_eq!(trace[3], PageId::new(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pages: Vec<PageId>,
}

impl Trace {
    /// Wrap an existing page sequence.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// The reference string `1 2 3 4 1 2 5 1 2 3 4 5`.
    pub fn sample() -> Self {
        Self::new(sample_pages())
    }

    /// Parse a textual trace.
    ///
    /// # Errors
    /// - `Error::TraceParse` for the first token that is not a `u32`;
    ///   `position` is its 0-based index among the tokens
    pub fn parse(text: &str) -> Result<Self> {
        let tokens = text
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
            .filter(|token| !token.is_empty());

        let pages = tokens
            .enumerate()
            .map(|(position, token)| {
                token.parse::<PageId>().map_err(|_| Error::TraceParse {
                    position,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(pages))
    }

    /// Read and parse a trace file.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read
    /// - `Error::TraceParse` for malformed content
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let trace = Self::parse(&text)?;
        debug!(path = %path.display(), references = trace.len(), "loaded trace");
        Ok(trace)
    }

    /// Number of distinct pages referenced.
    pub fn distinct_pages(&self) -> usize {
        let mut pages = self.pages.clone();
        pages.sort_unstable();
        pages.dedup();
        pages.len()
    }
}

impl Deref for Trace {
    type Target = [PageId];

    fn deref(&self) -> &[PageId] {
        &self.pages
    }
}

impl From<Vec<PageId>> for Trace {
    fn from(pages: Vec<PageId>) -> Self {
        Self::new(pages)
    }
}

impl FromIterator<PageId> for Trace {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let trace = Trace::parse("1,2, 3\t4\n\n5 ,6").unwrap();
        let ids: Vec<u32> = trace.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_parse_skips_comments() {
        let trace = Trace::parse("# warmup\n1 2\n  # hot loop\n3").unwrap();
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn test_parse_empty() {
        assert!(Trace::parse("").unwrap().is_empty());
        assert!(Trace::parse(" , \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_position() {
        match Trace::parse("1 2 x 4") {
            Err(Error::TraceParse { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "x");
            }
            other => panic!("Expected TraceParse error, got {:?}", other),
        }
        assert!(Trace::parse("-1").is_err());
    }

    #[test]
    fn test_sample() {
        let trace = Trace::sample();
        assert_eq!(trace.len(), 12);
        assert_eq!(trace.distinct_pages(), 5);
    }

    #[test]
    fn test_missing_file() {
        let result = Trace::from_file("/nonexistent/pagesim/trace.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
