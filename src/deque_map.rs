//! Ordered map with deque operations and positional access.
//!
//! This module provides the core [`DequeMap`] type. The map maintains
//! insertion order while providing O(1) keyed access, O(1) push/pop/peek at
//! both ends, and O(1) amortized access by logical position.
//!
//! # Examples
//!
//! ```
//! use deque_dict::deque_map::DequeMap;
//!
//! let mut map: DequeMap<_, _> = DequeMap::new();
//! map.insert("first", 1);
//! map.insert("second", 2);
//!
//! // Iteration preserves insertion order
//! let entries: Vec<_> = map.iter().collect();
//! assert_eq!(entries, [(&"first", &1), (&"second", &2)]);
//!
//! // Both ends are reachable in O(1)
//! assert_eq!(map.front(), Some(&1));
//! assert_eq!(map.pop_back(), Some(2));
//! ```

mod iter;

use std::borrow::Borrow;
use std::hash::BuildHasher;
use std::hash::Hash;
use std::ops::Index;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Keys;
pub use iter::Values;

use crate::arena::Arena;
use crate::error::Error;
use crate::key_index::KeyIndex;
use crate::position_cache::PositionCache;
use crate::Ptr;
use crate::RandomState;

/// An ordered map with O(1) deque operations at both ends and O(1) amortized
/// positional access.
///
/// Entries live in a slot arena and are threaded into a doubly-linked list
/// whose order is insertion order; a hash table indexes keys to entry
/// handles. A lazily built position cache mirrors the list as a flat array
/// so [`at`] resolves in O(1): mutations either patch it in O(1)
/// (tail append, pop at either end) or invalidate it (interior removal,
/// front insertion, repositioning), deferring the O(n) rebuild to the next
/// positional read.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Hash + Eq` for keyed operations
/// - `V`: Value type
/// - `S`: Hash builder type, defaults to the standard hasher
///
/// [`at`]: DequeMap::at
///
/// # Examples
///
/// ```
/// use deque_dict::DequeDict;
///
/// let mut dict = DequeDict::new();
/// dict.insert("apple", 5);
/// dict.insert("banana", 3);
/// dict.push_front("cherry", 8).unwrap();
///
/// // Order is cherry, apple, banana
/// assert_eq!(dict.front_key(), Some(&"cherry"));
/// assert_eq!(dict.at(1), Some(&5));
/// assert_eq!(dict.pop_back(), Some(3));
/// ```
pub struct DequeMap<K, V, S = RandomState> {
    arena: Arena<K, V>,
    index: KeyIndex,
    head: Option<Ptr>,
    tail: Option<Ptr>,
    cache: Option<PositionCache>,
    hasher: S,
}

/// Resolves a possibly negative logical index against `len`, Python style:
/// negative indices count from the back. Out-of-range resolves to `None`,
/// never clamps or wraps further.
fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let signed_len = isize::try_from(len).ok()?;
    let resolved = if index < 0 {
        index.checked_add(signed_len)?
    } else {
        index
    };
    usize::try_from(resolved).ok().filter(|&i| i < len)
}

impl<K, V> DequeMap<K, V> {
    /// Creates a new, empty map.
    ///
    /// The map does not allocate until the first element is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict: DequeDict<&str, i32> = DequeDict::new();
    /// assert!(dict.is_empty());
    /// dict.insert("key", 42);
    /// assert!(!dict.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new map able to hold at least `capacity` entries without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let dict: DequeDict<&str, i32> = DequeDict::with_capacity(10);
    /// assert_eq!(dict.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<K, V, S> DequeMap<K, V, S> {
    /// Creates a new map using the given hash builder.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates a new map with the specified capacity and hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::hash::RandomState;
    ///
    /// use deque_dict::deque_map::DequeMap;
    ///
    /// let mut map: DequeMap<&str, i32, _> =
    ///     DequeMap::with_capacity_and_hasher(10, RandomState::default());
    /// map.insert("key", 42);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        DequeMap {
            arena: Arena::with_capacity(capacity),
            index: KeyIndex::with_capacity(capacity),
            head: None,
            tail: None,
            cache: None,
            hasher,
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries. The position cache is destroyed along with them.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// dict.clear();
    /// assert!(dict.is_empty());
    /// assert_eq!(dict.front(), None);
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
        self.cache = None;
    }

    /// Returns a reference to the first value, or `None` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// assert_eq!(dict.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&V> {
        self.head.map(|ptr| &self.arena[ptr].value)
    }

    /// Returns the first key-value pair, or `None` if the map is empty.
    pub fn front_entry(&self) -> Option<(&K, &V)> {
        self.head.map(|ptr| {
            let data = &self.arena[ptr];
            (&data.key, &data.value)
        })
    }

    /// Returns a reference to the first key, or `None` if the map is empty.
    pub fn front_key(&self) -> Option<&K> {
        self.head.map(|ptr| &self.arena[ptr].key)
    }

    /// Returns a reference to the last value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// assert_eq!(dict.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&V> {
        self.tail.map(|ptr| &self.arena[ptr].value)
    }

    /// Returns the last key-value pair, or `None` if the map is empty.
    pub fn back_entry(&self) -> Option<(&K, &V)> {
        self.tail.map(|ptr| {
            let data = &self.arena[ptr];
            (&data.key, &data.value)
        })
    }

    /// Removes the first entry and returns its value, or `None` if the map
    /// is empty.
    ///
    /// The position cache, when present, is patched in O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// assert_eq!(dict.pop_front(), Some(1));
    /// assert_eq!(dict.pop_front(), Some(2));
    /// assert_eq!(dict.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<V> {
        self.pop_front_entry().map(|(_, value)| value)
    }

    /// Removes the first entry and returns it, or `None` if the map is
    /// empty.
    pub fn pop_front_entry(&mut self) -> Option<(K, V)> {
        let ptr = self.head?;
        let hash = self.arena[ptr].hash;
        self.index.remove(hash, |p| p == ptr);
        self.unlink(ptr);
        if let Some(cache) = self.cache.as_mut() {
            cache.pop_front();
        }
        let data = self.arena.free(ptr);
        Some((data.key, data.value))
    }

    /// Removes the last entry and returns its value, or `None` if the map is
    /// empty.
    ///
    /// The position cache, when present, is patched in O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// assert_eq!(dict.pop_back(), Some(2));
    /// assert_eq!(dict.pop_back(), Some(1));
    /// assert_eq!(dict.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<V> {
        self.pop_back_entry().map(|(_, value)| value)
    }

    /// Removes the last entry and returns it, or `None` if the map is empty.
    pub fn pop_back_entry(&mut self) -> Option<(K, V)> {
        let ptr = self.tail?;
        let hash = self.arena[ptr].hash;
        self.index.remove(hash, |p| p == ptr);
        self.unlink(ptr);
        if let Some(cache) = self.cache.as_mut() {
            cache.pop_back();
        }
        let data = self.arena.free(ptr);
        Some((data.key, data.value))
    }

    /// Returns a reference to the value at logical position `index`.
    ///
    /// Negative indices count from the back, so `at(-1)` is the last value.
    /// Returns `None` when the resolved index falls outside `0..len()`;
    /// the index is never clamped or wrapped further.
    ///
    /// Takes `&mut self` because the first positional read after an
    /// invalidating mutation rebuilds the position cache in O(n); every
    /// subsequent read is O(1) until the next invalidation.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(dict.at(0), Some(&1));
    /// assert_eq!(dict.at(2), Some(&3));
    /// assert_eq!(dict.at(-1), Some(&3));
    /// assert_eq!(dict.at(3), None);
    /// assert_eq!(dict.at(-4), None);
    /// ```
    pub fn at(&mut self, index: isize) -> Option<&V> {
        let ptr = self.ptr_at(index)?;
        Some(&self.arena[ptr].value)
    }

    /// Returns a mutable reference to the value at logical position `index`.
    ///
    /// Follows the same indexing and cache rules as [`at`](DequeMap::at).
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// *dict.at_mut(-1).unwrap() += 10;
    /// assert_eq!(dict.get(&"b"), Some(&12));
    /// ```
    pub fn at_mut(&mut self, index: isize) -> Option<&mut V> {
        let ptr = self.ptr_at(index)?;
        Some(&mut self.arena[ptr].value)
    }

    fn ptr_at(&mut self, index: isize) -> Option<Ptr> {
        let len = self.len();
        let index = resolve_index(index, len)?;
        if self.cache.is_none() {
            self.cache = Some(self.build_cache());
        }
        let cache = self.cache.as_ref()?;
        debug_assert_eq!(cache.len(), len);
        cache.get(index)
    }

    /// Full O(n) scan of the list, in order. Only run when a positional read
    /// finds the cache absent.
    fn build_cache(&self) -> PositionCache {
        let mut order = Vec::with_capacity(self.len());
        let mut cursor = self.head;
        while let Some(ptr) = cursor {
            order.push(ptr);
            cursor = self.arena[ptr].next;
        }
        PositionCache::from_order(order)
    }

    /// Returns an iterator over the entries in list order.
    ///
    /// The iterator is double-ended and exact-size; iterating forward and
    /// reversing the collected output equals iterating in reverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// let forward: Vec<_> = dict.iter().collect();
    /// let mut reversed: Vec<_> = dict.iter().rev().collect();
    /// reversed.reverse();
    /// assert_eq!(forward, reversed);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns an iterator over the keys in list order.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// let keys: Vec<_> = dict.keys().collect();
    /// assert_eq!(keys, [&"a", &"b"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { iter: self.iter() }
    }

    /// Returns an iterator over the values in list order.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// let values: Vec<_> = dict.values().collect();
    /// assert_eq!(values, [&1, &2]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { iter: self.iter() }
    }

    /// Reduces memory usage as much as possible while preserving entry
    /// handles: trailing free arena slots are released and the hash table is
    /// shrunk. Occupied slots are never moved.
    pub fn shrink_to_fit(&mut self) {
        self.arena.shrink_to_fit();
        let arena = &self.arena;
        self.index.shrink_to_fit(|ptr| arena[ptr].hash);
    }

    /// Splices `ptr` in as the new head. Links must be unset or about to be
    /// overwritten.
    fn link_front(&mut self, ptr: Ptr) {
        self.arena[ptr].prev = None;
        self.arena[ptr].next = self.head;
        match self.head {
            Some(head) => self.arena[head].prev = Some(ptr),
            None => self.tail = Some(ptr),
        }
        self.head = Some(ptr);
    }

    /// Splices `ptr` in as the new tail.
    fn link_back(&mut self, ptr: Ptr) {
        self.arena[ptr].prev = self.tail;
        self.arena[ptr].next = None;
        match self.tail {
            Some(tail) => self.arena[tail].next = Some(ptr),
            None => self.head = Some(ptr),
        }
        self.tail = Some(ptr);
    }

    /// Detaches `ptr` from the list, fixing neighbors and head/tail. The
    /// entry's own links are left stale; callers either relink or free it.
    fn unlink(&mut self, ptr: Ptr) {
        debug_assert!(self.arena.is_occupied(ptr));
        let prev = self.arena[ptr].prev;
        let next = self.arena[ptr].next;
        match prev {
            Some(prev) => self.arena[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.arena[next].prev = prev,
            None => self.tail = prev,
        }
    }
}

impl<K, V, S> DequeMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn find_ptr<Q>(&self, key: &Q) -> Option<Ptr>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        let arena = &self.arena;
        self.index.find(hash, |ptr| arena[ptr].key.borrow() == key)
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let dict = DequeDict::from([("a", 1)]);
    /// assert_eq!(dict.get(&"a"), Some(&1));
    /// assert_eq!(dict.get(&"b"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key)?;
        Some(&self.arena[ptr].value)
    }

    /// Returns a mutable reference to the value for `key`, or `None` if
    /// absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key)?;
        Some(&mut self.arena[ptr].value)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_ptr(key).is_some()
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// present.
    ///
    /// An existing key keeps its position: only the value is replaced, and
    /// the position cache is untouched. A new key is appended at the back,
    /// patching the cache in O(1) when it is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1), ("b", 2)]);
    /// assert_eq!(dict.insert("a", 10), Some(1));
    ///
    /// // "a" did not move to the back
    /// assert_eq!(dict.front_key(), Some(&"a"));
    ///
    /// assert_eq!(dict.insert("c", 3), None);
    /// assert_eq!(dict.back(), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hasher.hash_one(&key);
        let arena = &self.arena;
        if let Some(ptr) = self.index.find(hash, |p| arena[p].key == key) {
            return Some(std::mem::replace(&mut self.arena[ptr].value, value));
        }

        let ptr = self.arena.alloc(key, value, hash);
        self.link_back(ptr);
        let arena = &self.arena;
        self.index.insert(hash, ptr, |p| arena[p].hash);
        if let Some(cache) = self.cache.as_mut() {
            // Growth failure degrades to invalidation; the insert stands.
            if !cache.push_back(ptr) {
                self.cache = None;
            }
        }
        None
    }

    /// Inserts a key-value pair at the front.
    ///
    /// Unlike [`insert`](DequeMap::insert), this never overwrites: an
    /// existing key fails with [`Error::DuplicateKey`] and the map is
    /// unchanged. Front insertion shifts every position, so the position
    /// cache is invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    /// use deque_dict::Error;
    ///
    /// let mut dict = DequeDict::from([("a", 1)]);
    /// dict.push_front("z", 0).unwrap();
    /// assert_eq!(dict.front_key(), Some(&"z"));
    ///
    /// assert_eq!(dict.push_front("a", 9), Err(Error::DuplicateKey));
    /// assert_eq!(dict.get(&"a"), Some(&1));
    /// ```
    pub fn push_front(&mut self, key: K, value: V) -> Result<(), Error> {
        let hash = self.hasher.hash_one(&key);
        let arena = &self.arena;
        if self.index.find(hash, |p| arena[p].key == key).is_some() {
            return Err(Error::DuplicateKey);
        }

        let ptr = self.arena.alloc(key, value, hash);
        self.link_front(ptr);
        let arena = &self.arena;
        self.index.insert(hash, ptr, |p| arena[p].hash);
        self.cache = None;
        Ok(())
    }

    /// Removes `key` and returns its value, or `None` if absent.
    ///
    /// Removal may touch the interior of the list, so the position cache is
    /// invalidated; the next positional read rebuilds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(dict.remove(&"b"), Some(2));
    /// assert_eq!(dict.remove(&"b"), None);
    ///
    /// let keys: Vec<_> = dict.keys().collect();
    /// assert_eq!(keys, [&"a", &"c"]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` and returns the stored key-value pair, or `None` if
    /// absent.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        let arena = &self.arena;
        let ptr = self
            .index
            .remove(hash, |p| arena[p].key.borrow() == key)?;
        self.unlink(ptr);
        self.cache = None;
        let data = self.arena.free(ptr);
        Some((data.key, data.value))
    }

    /// Moves an existing key to the back without reinserting it.
    ///
    /// Fails with [`Error::KeyNotFound`] if the key is absent. When the
    /// entry is already last this is a no-op and the position cache is left
    /// untouched; otherwise the relative order changes and the cache is
    /// invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1), ("b", 2), ("c", 3)]);
    /// dict.move_to_back(&"a").unwrap();
    ///
    /// let keys: Vec<_> = dict.keys().collect();
    /// assert_eq!(keys, [&"b", &"c", &"a"]);
    /// ```
    pub fn move_to_back<Q>(&mut self, key: &Q) -> Result<(), Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key).ok_or(Error::KeyNotFound)?;
        if self.tail == Some(ptr) {
            return Ok(());
        }
        self.unlink(ptr);
        self.link_back(ptr);
        self.cache = None;
        Ok(())
    }

    /// Moves an existing key to the front without reinserting it.
    ///
    /// The counterpart of [`move_to_back`](DequeMap::move_to_back), with the
    /// same no-op and cache rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1), ("b", 2), ("c", 3)]);
    /// dict.move_to_front(&"c").unwrap();
    ///
    /// let keys: Vec<_> = dict.keys().collect();
    /// assert_eq!(keys, [&"c", &"a", &"b"]);
    /// ```
    pub fn move_to_front<Q>(&mut self, key: &Q) -> Result<(), Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key).ok_or(Error::KeyNotFound)?;
        if self.head == Some(ptr) {
            return Ok(());
        }
        self.unlink(ptr);
        self.link_front(ptr);
        self.cache = None;
        Ok(())
    }

    /// Returns a mutable reference to the value for `key`, inserting
    /// `default` at the back first if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_dict::DequeDict;
    ///
    /// let mut dict = DequeDict::from([("a", 1)]);
    /// assert_eq!(*dict.get_or_insert("a", 9), 1);
    /// assert_eq!(*dict.get_or_insert("b", 2), 2);
    /// assert_eq!(dict.back_entry(), Some((&"b", &2)));
    /// ```
    pub fn get_or_insert(&mut self, key: K, default: V) -> &mut V {
        self.get_or_insert_with(key, move || default)
    }

    /// Returns a mutable reference to the value for `key`, inserting the
    /// result of `default()` at the back first if the key is absent.
    ///
    /// `default` is only called when the insertion happens.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let hash = self.hasher.hash_one(&key);
        let arena = &self.arena;
        let ptr = match self.index.find(hash, |p| arena[p].key == key) {
            Some(ptr) => ptr,
            None => {
                let ptr = self.arena.alloc(key, default(), hash);
                self.link_back(ptr);
                let arena = &self.arena;
                self.index.insert(hash, ptr, |p| arena[p].hash);
                if let Some(cache) = self.cache.as_mut() {
                    if !cache.push_back(ptr) {
                        self.cache = None;
                    }
                }
                ptr
            }
        };
        &mut self.arena[ptr].value
    }
}

impl<K, V, S: Default> Default for DequeMap<K, V, S> {
    fn default() -> Self {
        DequeMap::with_capacity_and_hasher(0, S::default())
    }
}

impl<K, V, S> Clone for DequeMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut map = DequeMap::with_capacity_and_hasher(self.len(), self.hasher.clone());
        for (key, value) in self.iter() {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}

impl<K, V, S> std::fmt::Debug for DequeMap<K, V, S>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Equality compares contents as a mapping: same length and every key maps
/// to an equal value. Order is deliberately not part of equality.
///
/// # Examples
///
/// ```
/// use deque_dict::DequeDict;
///
/// let forward = DequeDict::from([("a", 1), ("b", 2)]);
/// let backward = DequeDict::from([("b", 2), ("a", 1)]);
/// assert_eq!(forward, backward);
/// ```
impl<K, V, S> PartialEq for DequeMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| *value == *v))
    }
}

impl<K, V, S> Eq for DequeMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, Q, S> Index<&Q> for DequeMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present. Use [`get`](DequeMap::get) for a
    /// non-panicking lookup.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> Extend<(K, V)> for DequeMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Applies [`insert`](DequeMap::insert) for each pair: existing keys are
    /// updated in place, new keys are appended in iteration order.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for DequeMap<K, V, S>
where
    K: Hash + Eq + Copy,
    V: Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K, V, S> FromIterator<(K, V)> for DequeMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = DequeMap::with_capacity_and_hasher(iter.size_hint().0, S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for DequeMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    /// Builds a map from pairs in array order; duplicate keys collapse onto
    /// the first occurrence's position with the last value, matching
    /// [`insert`](DequeMap::insert).
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, K, V, S> IntoIterator for &'a DequeMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for DequeMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        let remaining = self.len();
        IntoIter {
            arena: self.arena,
            front: self.head,
            back: self.tail,
            remaining,
        }
    }
}
