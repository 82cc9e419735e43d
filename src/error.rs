use thiserror::Error;

/// Errors returned by checked lookups on a [`HashMap`](crate::HashMap).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The requested key is not present in the map.
    #[error("key not found")]
    NotFound,
}
