use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

use crate::indexed_min_queue::QueueError;

/// Assigns dense identifiers `0..capacity` to hashable keys.
///
/// [`IndexedMinPriorityQueue`] only works with integer identifiers.
/// This type is the usual companion when elements of the algorithm
/// are something else, like grid cells or node names.
/// Identifiers are handed out in order of first appearance and never change
/// until [`clear`].
///
/// [`IndexedMinPriorityQueue`]: struct.IndexedMinPriorityQueue.html
/// [`clear`]: struct.KeyIndexer.html#method.clear
///
/// # Examples
///
/// ```
/// use indexed_min_queue::{IndexedMinPriorityQueue, KeyIndexer};
///
/// let mut ids = KeyIndexer::with_capacity(3);
/// let mut queue = IndexedMinPriorityQueue::new(ids.capacity());
///
/// queue.insert(ids.get_or_insert("b")?, 2)?;
/// queue.insert(ids.get_or_insert("a")?, 1)?;
/// queue.decrease_priority(ids.get_or_insert("b")?, 0)?;
///
/// let (id, _) = queue.extract_min().unwrap();
/// assert_eq!(ids.key(id), Some(&"b"));
/// # Ok::<(), indexed_min_queue::QueueError>(())
/// ```
#[derive(Clone, Debug)]
pub struct KeyIndexer<TKey, S = RandomState>
where
    TKey: Hash + Eq,
    S: BuildHasher,
{
    keys: IndexSet<TKey, S>,
    capacity: usize,
}

impl<TKey: Hash + Eq> KeyIndexer<TKey, RandomState> {
    /// Creates indexer which hands out at most `capacity` identifiers.
    ///
    /// ```
    /// use indexed_min_queue::KeyIndexer;
    /// let ids: KeyIndexer<String> = KeyIndexer::with_capacity(16);
    /// assert_eq!(ids.capacity(), 16);
    /// assert!(ids.is_empty());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<TKey: Hash + Eq, S: BuildHasher> KeyIndexer<TKey, S> {
    /// Same as [`with_capacity`] but with specific Hasher.
    ///
    /// [`with_capacity`]: struct.KeyIndexer.html#method.with_capacity
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            keys: IndexSet::with_capacity_and_hasher(capacity, hasher),
            capacity,
        }
    }

    /// Returns identifier of `key`, assigning the next free one if key is new.
    ///
    /// ### Errors
    ///
    /// [`QueueError::KeyspaceExhausted`] if key is new and all identifiers are taken.
    ///
    /// ```
    /// use indexed_min_queue::{KeyIndexer, QueueError};
    /// let mut ids = KeyIndexer::with_capacity(2);
    /// assert_eq!(ids.get_or_insert('x'), Ok(0));
    /// assert_eq!(ids.get_or_insert('y'), Ok(1));
    /// assert_eq!(ids.get_or_insert('x'), Ok(0));
    /// assert_eq!(ids.get_or_insert('z'), Err(QueueError::KeyspaceExhausted { capacity: 2 }));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Amortized ***O(1)***, one hash lookup
    ///
    /// [`QueueError::KeyspaceExhausted`]: enum.QueueError.html#variant.KeyspaceExhausted
    pub fn get_or_insert(&mut self, key: TKey) -> Result<usize, QueueError> {
        if let Some(id) = self.keys.get_index_of(&key) {
            return Ok(id);
        }
        if self.keys.len() >= self.capacity {
            log::debug!("no free identifiers left, capacity is {}", self.capacity);
            return Err(QueueError::KeyspaceExhausted {
                capacity: self.capacity,
            });
        }
        let (id, _) = self.keys.insert_full(key);
        Ok(id)
    }

    /// Returns identifier previously assigned to `key`.
    #[inline]
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.keys.get_index_of(key)
    }

    /// Returns key which owns identifier `id`.
    #[inline]
    pub fn key(&self, id: usize) -> Option<&TKey> {
        self.keys.get_index(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forgets all keys. Identifiers will be handed out from zero again.
    #[inline]
    pub fn clear(&mut self) {
        self.keys.clear()
    }
}
