//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Identifies a virtual page referenced by the simulated workload.
///
/// Pages are opaque to the simulator: only equality, hashing and ordering
/// are ever used. Ordering gives reports a stable, sorted resident set.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(42);
/// assert_eq!(page.0, 42);
/// assert_eq!(page.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    #[inline]
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<u32>().map(PageId)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
