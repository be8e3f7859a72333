//! Position cache: the structure behind O(1) amortized `at(i)`.
//!
//! The cache is a flat array of entry handles mirroring list order, plus a
//! left-trim offset. It exists only while every mutation since its last
//! rebuild could be patched in O(1):
//!
//! - append at the tail extends the array,
//! - removal at the front bumps the offset (no shift),
//! - removal at the back truncates by one.
//!
//! Anything that would require shifting interior elements — removing an
//! arbitrary key, inserting at the front, repositioning an entry — is not
//! patched: the map drops the cache instead, and the next positional read
//! pays a single O(n) rebuild. That keeps the common deque patterns cheap and
//! bills rare interior mutations lazily, never eagerly.

use crate::Ptr;

/// Smallest capacity the array grows to; growth doubles from there.
const MIN_CAPACITY: usize = 8;

/// A contiguous mirror of the list order.
///
/// `slots[offset..]` lists entry handles in exactly list order whenever the
/// cache is held by the map. The map drops the whole value to invalidate.
#[derive(Debug, Clone)]
pub(crate) struct PositionCache {
    slots: Vec<Ptr>,
    offset: usize,
}

impl PositionCache {
    /// Builds a cache from a full scan of the list, in order.
    pub(crate) fn from_order(order: Vec<Ptr>) -> Self {
        PositionCache {
            slots: order,
            offset: 0,
        }
    }

    /// Logical number of positions the cache covers.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.offset
    }

    /// Handle at logical position `index`. The caller resolves negative
    /// indices and bounds-checks against the map length first.
    pub(crate) fn get(&self, index: usize) -> Option<Ptr> {
        self.slots.get(self.offset + index).copied()
    }

    /// Patches a tail append. Returns `false` if growing the array failed,
    /// in which case the caller must invalidate the cache; the map mutation
    /// itself has already succeeded and is never rolled back.
    #[must_use]
    pub(crate) fn push_back(&mut self, ptr: Ptr) -> bool {
        if self.slots.len() == self.slots.capacity() {
            let grow = self.slots.capacity().max(MIN_CAPACITY);
            if self.slots.try_reserve(grow).is_err() {
                return false;
            }
        }
        self.slots.push(ptr);
        true
    }

    /// Patches a tail removal.
    pub(crate) fn pop_back(&mut self) {
        self.slots.pop();
        self.reset_if_drained();
    }

    /// Patches a head removal: one offset bump, no element shift.
    pub(crate) fn pop_front(&mut self) {
        self.offset += 1;
        self.reset_if_drained();
    }

    /// Once every position has been trimmed away, drop the dead prefix so a
    /// refilling workload starts from a clean array.
    fn reset_if_drained(&mut self) {
        if self.offset >= self.slots.len() {
            self.slots.clear();
            self.offset = 0;
        }
    }
}
