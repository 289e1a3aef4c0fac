//! The error type shared by every container in this crate.

use thiserror::Error;

/// Errors reported by the containers in this crate.
///
/// All of these are precondition violations: nothing is retried, and the caller is expected to
/// fix the setup or the access pattern that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The container was set up in a way it can never be used, e.g. a [`RandomBag`] whose refill
    /// source supplies no items.
    ///
    /// [`RandomBag`]: crate::bag::RandomBag
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A logical index fell outside `[0, count)`.
    #[error("index {index} (current count: {count}) is out of range")]
    IndexOutOfRange {
        /// The requested logical index
        index: isize,
        /// The number of valid elements at the time of the access
        count: usize,
    },

    /// The oldest or latest element was requested from an empty container.
    #[error("the container is currently empty")]
    EmptyContainer,
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}

/// A `Result` alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
