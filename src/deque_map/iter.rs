use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::Ptr;

/// An iterator over the entries of a [`DequeMap`], in list order.
///
/// Created by [`iter`]. The iterator is a live projection: it walks the
/// linked list through the shared borrow it holds, so it always reflects the
/// order current when it was created, and the borrow checker rules out
/// structural mutation while it exists.
///
/// [`DequeMap`]: crate::deque_map::DequeMap
/// [`iter`]: crate::deque_map::DequeMap::iter
///
/// # Examples
///
/// ```
/// use deque_dict::DequeDict;
///
/// let dict = DequeDict::from([("a", 1), ("b", 2)]);
/// for (key, value) in dict.iter() {
///     println!("{key}: {value}");
/// }
/// ```
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    pub(crate) arena: &'a Arena<K, V>,
    pub(crate) front: Option<Ptr>,
    pub(crate) back: Option<Ptr>,
    pub(crate) remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.front?;
        self.remaining -= 1;
        let data = &self.arena[ptr];
        if self.remaining == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.front = data.next;
        }
        Some((&data.key, &data.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.back?;
        self.remaining -= 1;
        let data = &self.arena[ptr];
        if self.remaining == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.back = data.prev;
        }
        Some((&data.key, &data.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`DequeMap`], in list order.
///
/// Created by [`keys`].
///
/// [`DequeMap`]: crate::deque_map::DequeMap
/// [`keys`]: crate::deque_map::DequeMap::keys
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    pub(crate) iter: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`DequeMap`], in list order.
///
/// Created by [`values`].
///
/// [`DequeMap`]: crate::deque_map::DequeMap
/// [`values`]: crate::deque_map::DequeMap::values
#[derive(Debug)]
pub struct Values<'a, K, V> {
    pub(crate) iter: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An owning iterator over the entries of a [`DequeMap`], in list order.
///
/// Created by the [`IntoIterator`] implementation on `DequeMap`. Entries are
/// freed from the arena as they are yielded; anything not consumed is dropped
/// with the iterator.
///
/// [`DequeMap`]: crate::deque_map::DequeMap
///
/// # Examples
///
/// ```
/// use deque_dict::DequeDict;
///
/// let dict = DequeDict::from([("a", 1), ("b", 2)]);
/// let pairs: Vec<_> = dict.into_iter().collect();
/// assert_eq!(pairs, [("a", 1), ("b", 2)]);
/// ```
#[derive(Debug)]
pub struct IntoIter<K, V> {
    pub(crate) arena: Arena<K, V>,
    pub(crate) front: Option<Ptr>,
    pub(crate) back: Option<Ptr>,
    pub(crate) remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.front?;
        self.remaining -= 1;
        let data = self.arena.free(ptr);
        if self.remaining == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.front = data.next;
        }
        Some((data.key, data.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.back?;
        self.remaining -= 1;
        let data = self.arena.free(ptr);
        if self.remaining == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.back = data.prev;
        }
        Some((data.key, data.value))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
