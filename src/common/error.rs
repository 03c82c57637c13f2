//! Error types for pagesim.

use thiserror::Error;

use crate::common::PageId;
use crate::memory::replacer::PolicyKind;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The first four variants are internal consistency failures: they can only
/// be produced by a mis-sequenced driver or a broken policy, never by user
/// input. See [`Error::is_internal`].
#[derive(Debug, Error)]
pub enum Error {
    /// Insertion attempted while the frame set is at capacity.
    #[error("cannot admit page {page}: all {capacity} frames are occupied")]
    Capacity { page: PageId, capacity: usize },

    /// Eviction requested for a page that is not resident.
    #[error("page {0} is not resident")]
    NotResident(PageId),

    /// Insertion of a page that is already resident.
    #[error("page {0} is already resident")]
    AlreadyResident(PageId),

    /// A policy declined to pick a victim from a full frame set.
    #[error("{0} policy chose no victim from a full frame set")]
    NoVictim(PolicyKind),

    /// Rejected before any simulation step runs.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A reference trace token that is not a page number.
    #[error("invalid page reference {token:?} at position {position}")]
    TraceParse { position: usize, token: String },

    /// I/O error while reading a trace file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error signals a bug in the engine rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::Capacity { .. }
                | Error::NotResident(_)
                | Error::AlreadyResident(_)
                | Error::NoVictim(_)
        )
    }
}
