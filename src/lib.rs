#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod arena;
pub mod deque_map;
mod error;
mod key_index;
mod position_cache;

type RandomState = std::hash::RandomState;

/// An ordered map with O(1) deque operations and O(1) amortized positional
/// access, using the default hasher.
///
/// This is the main type alias. For custom hashers, use
/// [`deque_map::DequeMap`] directly.
///
/// # Examples
///
/// ```
/// use deque_dict::DequeDict;
///
/// let mut dict = DequeDict::new();
/// dict.insert("a", 1);
/// dict.insert("b", 2);
///
/// // Maintains insertion order
/// let entries: Vec<_> = dict.iter().collect();
/// assert_eq!(entries, [(&"a", &1), (&"b", &2)]);
/// ```
pub type DequeDict<K, V> = crate::deque_map::DequeMap<K, V, RandomState>;

use std::num::NonZeroU32;

pub use deque_map::IntoIter;
pub use deque_map::Iter;
pub use deque_map::Keys;
pub use deque_map::Values;
pub use error::Error;

/// A compact handle identifying an entry slot in the arena.
///
/// Stored as index + 1 so that `Option<Ptr>` is pointer-free and niche
/// optimized. Handles are non-generational: once an entry is removed, its
/// slot (and handle) may be reused for a new entry. Handles never leave the
/// crate, so a stale handle cannot outlive the mutation that freed it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct Ptr(NonZeroU32);

impl std::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}
