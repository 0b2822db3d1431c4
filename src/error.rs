use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by [`SkipList`](crate::SkipList).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The key is not present. The list is left unchanged.
    #[error("key {0} not found")]
    NotFound(u32),
    /// A level ceiling or promotion probability outside its valid domain, or an
    /// attempt to reconfigure a list that already holds entries.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
