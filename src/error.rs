use thiserror::Error;

/// Errors returned by operations whose failure a caller must distinguish
/// from simple absence.
///
/// Lookups, pops, peeks and positional reads signal absence, emptiness, or
/// out-of-range indices through `None` instead; see the method docs on
/// [`DequeMap`](crate::deque_map::DequeMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The key is already present; front insertion never overwrites.
    #[error("key already exists")]
    DuplicateKey,

    /// The key is not present in the map.
    #[error("key not found")]
    KeyNotFound,
}
