use hashbrown::HashTable;

use crate::Ptr;

/// Hash index from key to entry handle.
///
/// The table stores only [`Ptr`] handles; keys and their hashes live in the
/// arena, so resizing never re-hashes a key. Callers supply closures that
/// resolve a handle against the arena for equality checks and re-hashing,
/// keeping this wrapper free of any borrow of the entry storage.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeyIndex {
    table: HashTable<Ptr>,
}

impl KeyIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        KeyIndex {
            table: HashTable::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    /// Looks up the handle whose entry matches, if any. `is_match` is called
    /// only for handles whose stored hash collides with `hash`.
    pub(crate) fn find(&self, hash: u64, mut is_match: impl FnMut(Ptr) -> bool) -> Option<Ptr> {
        self.table.find(hash, |&ptr| is_match(ptr)).copied()
    }

    /// Inserts a handle for a key known to be absent. `rehash` maps a handle
    /// back to its entry's stored hash when the table grows.
    pub(crate) fn insert(&mut self, hash: u64, ptr: Ptr, rehash: impl Fn(Ptr) -> u64) {
        self.table.insert_unique(hash, ptr, |&p| rehash(p));
    }

    /// Removes and returns the matching handle, if present.
    pub(crate) fn remove(
        &mut self,
        hash: u64,
        mut is_match: impl FnMut(Ptr) -> bool,
    ) -> Option<Ptr> {
        match self.table.find_entry(hash, |&ptr| is_match(ptr)) {
            Ok(entry) => Some(entry.remove().0),
            Err(_) => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.table.clear();
    }

    pub(crate) fn shrink_to_fit(&mut self, rehash: impl Fn(Ptr) -> u64) {
        self.table.shrink_to_fit(|&p| rehash(p));
    }
}
