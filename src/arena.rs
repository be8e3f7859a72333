use std::mem;
use std::ops::Index;
use std::ops::IndexMut;

use crate::Ptr;

/// Free-slot count above which `free` starts handing trailing free slots
/// back to the allocator. Reuse is unaffected: every free slot stays in the
/// pool until it is recycled or trimmed off the arena's end.
const FREE_POOL_LIMIT: usize = 128;

#[cold]
#[inline(never)]
fn assert_free() -> ! {
    panic!("attempted to access data of free slot");
}

/// One live entry: key, value, the key's cached hash, and the ordering links.
///
/// `prev`/`next` are non-owning handles into the same arena; the map is
/// responsible for keeping them consistent with its head/tail.
#[derive(Debug, Clone)]
pub(crate) struct EntryData<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
    pub(crate) prev: Option<Ptr>,
    pub(crate) next: Option<Ptr>,
}

/// A free slot remembers its position in the free pool so trimming can
/// remove it from the pool without a scan.
#[derive(Debug, Clone)]
enum Slot<K, V> {
    Free { pool_slot: usize },
    Occupied(EntryData<K, V>),
}

/// Slot arena owning every entry of a map.
///
/// Entries are addressed by [`Ptr`] handles, which stay stable for the
/// lifetime of the entry. Every freed slot goes into the free pool and is
/// recycled before the arena grows; once the pool exceeds
/// `FREE_POOL_LIMIT`, free slots at the arena's end are released to the
/// allocator instead of accumulating.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_pool: Vec<Ptr>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_pool: Vec::new(),
        }
    }

    /// Returns a handle to a fresh entry with links unset. Reuses a pooled
    /// slot when one is available.
    pub(crate) fn alloc(&mut self, key: K, value: V, hash: u64) -> Ptr {
        let data = EntryData {
            key,
            value,
            hash,
            prev: None,
            next: None,
        };
        if let Some(ptr) = self.free_pool.pop() {
            self.slots[ptr.index()] = Slot::Occupied(data);
            ptr
        } else {
            let ptr = Ptr::from_index(self.slots.len());
            self.slots.push(Slot::Occupied(data));
            ptr
        }
    }

    /// Frees the slot at `ptr` and returns its data. The handle must not be
    /// used again until `alloc` hands it back out.
    pub(crate) fn free(&mut self, ptr: Ptr) -> EntryData<K, V> {
        let freed = Slot::Free {
            pool_slot: self.free_pool.len(),
        };
        let data = match mem::replace(&mut self.slots[ptr.index()], freed) {
            Slot::Occupied(data) => data,
            Slot::Free { .. } => assert_free(),
        };
        self.free_pool.push(ptr);
        self.trim_trailing_free(FREE_POOL_LIMIT);
        data
    }

    /// Pops free slots off the arena's end until fewer than `keep` free
    /// slots remain or an occupied slot is reached. Each popped slot is
    /// swap-removed from the pool, fixing the back-reference of the pool
    /// entry that takes its place.
    fn trim_trailing_free(&mut self, keep: usize) {
        while self.free_pool.len() > keep {
            let pool_slot = match self.slots.last() {
                Some(&Slot::Free { pool_slot }) => pool_slot,
                _ => break,
            };
            self.slots.pop();
            self.free_pool.swap_remove(pool_slot);
            if let Some(&moved) = self.free_pool.get(pool_slot) {
                self.slots[moved.index()] = Slot::Free { pool_slot };
            }
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        matches!(self.slots.get(ptr.index()), Some(Slot::Occupied(_)))
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_pool.clear();
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        // Occupied slots cannot be moved to fill free ones: live Ptr handles
        // in the key index and position cache point at fixed indices. Trim
        // trailing free slots, then let Vec release the rest of its excess.
        self.trim_trailing_free(0);
        self.slots.shrink_to_fit();
        self.free_pool.shrink_to_fit();
    }
}

impl<K, V> Index<Ptr> for Arena<K, V> {
    type Output = EntryData<K, V>;

    fn index(&self, index: Ptr) -> &Self::Output {
        match &self.slots[index.index()] {
            Slot::Occupied(data) => data,
            Slot::Free { .. } => assert_free(),
        }
    }
}

impl<K, V> IndexMut<Ptr> for Arena<K, V> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        match &mut self.slots[index.index()] {
            Slot::Occupied(data) => data,
            Slot::Free { .. } => assert_free(),
        }
    }
}
