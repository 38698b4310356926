use std::fmt::{Debug, Display};

use crate::editable_binary_heap::{BinaryHeap, BinaryHeapIterator};
use crate::position_index::PositionIndex;

/// A minimum priority queue over identifiers `0..capacity`.
///
/// Smaller `TPriority` values are extracted first.
/// Each identifier may be present at most once, and its priority can be
/// moved towards the front with [`decrease_priority`] or towards the back with
/// [`increase_priority`] without removing it.
///
/// Identifiers outside `0..capacity` are rejected with [`QueueError::IndexOutOfRange`]
/// by every method which takes one.
/// Priorities which are not comparable with themselves (like `f64::NAN`)
/// are rejected with [`QueueError::UnorderedPriority`].
///
/// It is logic error if priority values change other way than by methods of the queue.
/// This is normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// [`decrease_priority`]: struct.IndexedMinPriorityQueue.html#method.decrease_priority
/// [`increase_priority`]: struct.IndexedMinPriorityQueue.html#method.increase_priority
/// [`QueueError::IndexOutOfRange`]: enum.QueueError.html#variant.IndexOutOfRange
/// [`QueueError::UnorderedPriority`]: enum.QueueError.html#variant.UnorderedPriority
///
/// # Examples
///
/// ## Main example
/// ```
/// use indexed_min_queue::{IndexedMinPriorityQueue, QueueError};
///
/// let mut queue = IndexedMinPriorityQueue::new(10);
///
/// // Currently queue is empty
/// assert_eq!(queue.peek_min(), None);
///
/// queue.insert(0, 0.7)?;
/// queue.insert(1, 0.123)?;
/// queue.insert(2, 0.453)?;
/// queue.insert(3, 0.23)?;
///
/// // Peek returns the smallest pair.
/// assert_eq!(queue.peek_min(), Some((1, &0.123)));
/// assert_eq!(queue.len(), 4);
///
/// // Inserting present identifier again changes nothing
/// assert_eq!(queue.insert(1, 100.0), Ok(false));
///
/// // Priorities are changed in place
/// assert_eq!(queue.decrease_priority(0, 0.01), Ok(true));
/// assert_eq!(queue.increase_priority(3, 5.0), Ok(true));
///
/// assert_eq!(queue.extract_min(), Some((0, 0.01)));
/// assert_eq!(queue.extract_min(), Some((1, 0.123)));
/// assert_eq!(queue.extract_min(), Some((2, 0.453)));
/// assert_eq!(queue.extract_min(), Some((3, 5.0)));
/// // Now queue is empty
/// assert_eq!(queue.extract_min(), None);
///
/// // Identifiers must be below capacity
/// assert_eq!(
///     queue.insert(10, 1.0),
///     Err(QueueError::IndexOutOfRange { index: 10, capacity: 10 })
/// );
/// # Ok::<(), QueueError>(())
/// ```
#[derive(Clone)]
pub struct IndexedMinPriorityQueue<TPriority>
where
    TPriority: PartialOrd,
{
    heap: BinaryHeap<TPriority>,
    id_to_pos: PositionIndex,
}

impl<TPriority: PartialOrd> IndexedMinPriorityQueue<TPriority> {
    /// Creates an empty queue accepting identifiers in `0..capacity`.
    ///
    /// All memory the queue will ever use is allocated here.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(10);
    /// queue.insert(9, 4).unwrap();
    /// assert_eq!(queue.capacity(), 10);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(capacity)***
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            id_to_pos: PositionIndex::with_capacity(capacity),
        }
    }

    /// Returns the exclusive upper bound of identifiers.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.id_to_pos.capacity()
    }

    /// Adds identifier with given priority.
    ///
    /// Returns `Ok(true)` if identifier was added
    /// and `Ok(false)` if it is already present.
    /// In the second case the stored priority is kept,
    /// use [`decrease_priority`] or [`increase_priority`] to change it.
    ///
    /// ### Errors
    ///
    /// [`QueueError::IndexOutOfRange`] if `id >= capacity`,
    /// [`QueueError::UnorderedPriority`] if `priority` can't be compared with itself.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(4);
    /// assert_eq!(queue.insert(3, 5), Ok(true));
    /// assert_eq!(queue.insert(3, 1), Ok(false));
    /// assert_eq!(queue.get_priority(3), Ok(Some(&5)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***
    ///
    /// [`decrease_priority`]: struct.IndexedMinPriorityQueue.html#method.decrease_priority
    /// [`increase_priority`]: struct.IndexedMinPriorityQueue.html#method.increase_priority
    /// [`QueueError::IndexOutOfRange`]: enum.QueueError.html#variant.IndexOutOfRange
    /// [`QueueError::UnorderedPriority`]: enum.QueueError.html#variant.UnorderedPriority
    pub fn insert(&mut self, id: usize, priority: TPriority) -> Result<bool, QueueError> {
        let position = self.id_to_pos.get(id)?;
        check_ordered(&priority)?;
        if position.is_some() {
            return Ok(false);
        }
        debug_assert!(self.heap.usize_len() < self.capacity());

        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let heap = &mut self.heap;
        let id_to_pos = &mut self.id_to_pos;
        heap.push(id, priority, |moved, heap_idx| id_to_pos.set(moved, heap_idx));
        Ok(true)
    }

    /// Removes and returns identifier with the smallest priority, along with the priority.
    /// Returns `None` if queue is empty.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(5);
    /// for (id, priority) in [(0, 0.7), (1, 0.123), (2, 0.453), (3, 0.23)] {
    ///     queue.insert(id, priority).unwrap();
    /// }
    /// assert_eq!(queue.extract_min(), Some((1, 0.123)));
    /// assert_eq!(queue.extract_min(), Some((3, 0.23)));
    /// assert_eq!(queue.extract_min(), Some((2, 0.453)));
    /// assert_eq!(queue.extract_min(), Some((0, 0.7)));
    /// assert_eq!(queue.extract_min(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***
    pub fn extract_min(&mut self) -> Option<(usize, TPriority)> {
        let heap = &mut self.heap;
        let id_to_pos = &mut self.id_to_pos;

        let (id, priority) = heap.pop(|moved, heap_idx| id_to_pos.set(moved, heap_idx))?;
        id_to_pos.vacate(id);
        Some((id, priority))
    }

    /// Returns identifier with the smallest priority without removing it.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(5);
    /// queue.insert(4, 10).unwrap();
    /// queue.insert(2, 3).unwrap();
    /// assert_eq!(queue.peek_min(), Some((2, &3)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn peek_min(&self) -> Option<(usize, &TPriority)> {
        self.heap.peek()
    }

    /// Moves identifier towards the front of the queue.
    ///
    /// Returns `Ok(true)` if priority was changed.
    /// Returns `Ok(false)` and changes nothing if identifier is not in queue
    /// or `priority` is not strictly smaller than the current one.
    ///
    /// ### Errors
    ///
    /// Same as [`insert`].
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(5);
    /// queue.insert(0, 1.0).unwrap();
    /// queue.insert(1, 2.0).unwrap();
    /// assert_eq!(queue.decrease_priority(1, 5.0), Ok(false));
    /// assert_eq!(queue.decrease_priority(1, 0.5), Ok(true));
    /// assert_eq!(queue.decrease_priority(4, 0.1), Ok(false));
    /// assert_eq!(queue.extract_min(), Some((1, 0.5)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***
    ///
    /// [`insert`]: struct.IndexedMinPriorityQueue.html#method.insert
    pub fn decrease_priority(&mut self, id: usize, priority: TPriority) -> Result<bool, QueueError> {
        let position = self.id_to_pos.get(id)?;
        check_ordered(&priority)?;
        let position = match position {
            Some(position) => position,
            None => return Ok(false),
        };

        let heap = &mut self.heap;
        let id_to_pos = &mut self.id_to_pos;
        Ok(heap.decrease_priority(position, priority, |moved, heap_idx| {
            id_to_pos.set(moved, heap_idx)
        }))
    }

    /// Moves identifier towards the back of the queue.
    ///
    /// Returns `Ok(true)` if priority was changed.
    /// Returns `Ok(false)` and changes nothing if identifier is not in queue
    /// or `priority` is not strictly bigger than the current one.
    ///
    /// ### Errors
    ///
    /// Same as [`insert`].
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(5);
    /// queue.insert(0, 1).unwrap();
    /// queue.insert(1, 2).unwrap();
    /// assert_eq!(queue.increase_priority(0, 0), Ok(false));
    /// assert_eq!(queue.increase_priority(0, 7), Ok(true));
    /// assert_eq!(queue.extract_min(), Some((1, 2)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***
    ///
    /// [`insert`]: struct.IndexedMinPriorityQueue.html#method.insert
    pub fn increase_priority(&mut self, id: usize, priority: TPriority) -> Result<bool, QueueError> {
        let position = self.id_to_pos.get(id)?;
        check_ordered(&priority)?;
        let position = match position {
            Some(position) => position,
            None => return Ok(false),
        };

        let heap = &mut self.heap;
        let id_to_pos = &mut self.id_to_pos;
        Ok(heap.increase_priority(position, priority, |moved, heap_idx| {
            id_to_pos.set(moved, heap_idx)
        }))
    }

    /// Returns `Ok(true)` if identifier is in queue.
    ///
    /// ### Errors
    ///
    /// [`QueueError::IndexOutOfRange`] if `id >= capacity`.
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(20);
    /// queue.insert(1, 0.123).unwrap();
    /// assert_eq!(queue.contains(1), Ok(true));
    /// assert_eq!(queue.contains(10), Ok(false));
    /// assert!(queue.contains(100).is_err());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    ///
    /// [`QueueError::IndexOutOfRange`]: enum.QueueError.html#variant.IndexOutOfRange
    #[inline]
    pub fn contains(&self, id: usize) -> Result<bool, QueueError> {
        Ok(self.id_to_pos.get(id)?.is_some())
    }

    /// Get reference to the priority of identifier, `Ok(None)` if it is not in queue.
    ///
    /// ### Errors
    ///
    /// [`QueueError::IndexOutOfRange`] if `id >= capacity`.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    ///
    /// [`QueueError::IndexOutOfRange`]: enum.QueueError.html#variant.IndexOutOfRange
    pub fn get_priority(&self, id: usize) -> Result<Option<&TPriority>, QueueError> {
        let position = match self.id_to_pos.get(id)? {
            Some(position) => position,
            None => return Ok(None),
        };
        let (_, priority) = self
            .heap
            .look_into(position)
            .expect("Must contain if id_to_pos contain");
        Ok(Some(priority))
    }

    /// Get the number of identifiers in queue.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.usize_len()
    }

    /// Returns true if queue is empty.
    ///
    /// ```
    /// let mut queue = indexed_min_queue::IndexedMinPriorityQueue::new(1);
    /// assert!(queue.is_empty());
    /// queue.insert(0, 5).unwrap();
    /// assert!(!queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Make the queue empty. Capacity stays the same.
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(5);
    /// queue.insert(3, 3).unwrap();
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.contains(3), Ok(false));
    /// assert_eq!(queue.capacity(), 5);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(capacity)***
    pub fn clear(&mut self) {
        log::trace!(
            "clearing queue with {} of {} identifiers",
            self.heap.usize_len(),
            self.capacity()
        );
        self.heap.clear();
        self.id_to_pos.reset();
    }

    /// Create readonly borrowing iterator over queue.
    /// Items come in heap order, not sorted.
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(5);
    /// for id in 0..5 {
    ///     queue.insert(id, 10 - id).unwrap();
    /// }
    /// let mut entries: Vec<(usize, usize)> = queue.iter().map(|(id, &p)| (id, p)).collect();
    /// entries.sort();
    /// assert_eq!(entries, vec![(0, 10), (1, 9), (2, 8), (3, 7), (4, 6)]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n)***
    pub fn iter(&self) -> IndexedMinPriorityQueueBorrowIter<TPriority> {
        IndexedMinPriorityQueueBorrowIter {
            heap_iterator: self.heap.iter(),
        }
    }
}

#[inline(always)]
fn check_ordered<TPriority: PartialOrd>(priority: &TPriority) -> Result<(), QueueError> {
    if priority.partial_cmp(priority).is_some() {
        Ok(())
    } else {
        log::debug!("priority which is not comparable with itself rejected");
        Err(QueueError::UnorderedPriority)
    }
}

impl<TPriority: PartialOrd + Debug> Debug for IndexedMinPriorityQueue<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for entry in self.iter() {
            write!(f, "{:?}", entry)?;
        }
        write!(f, "]")
    }
}

impl<TPriority: PartialOrd> IntoIterator for IndexedMinPriorityQueue<TPriority> {
    type Item = (usize, TPriority);
    type IntoIter = IndexedMinPriorityQueueIterator<TPriority>;

    /// Make iterator that return items in ascending order of priority.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_queue::IndexedMinPriorityQueue;
    /// let mut queue = IndexedMinPriorityQueue::new(3);
    /// queue.insert(0, "c").unwrap();
    /// queue.insert(1, "a").unwrap();
    /// queue.insert(2, "b").unwrap();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some((1, "a")));
    /// assert_eq!(iterator.next(), Some((2, "b")));
    /// assert_eq!(iterator.next(), Some((0, "c")));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// This is consuming iterator that returns elements in ascending order of priority
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct IndexedMinPriorityQueueIterator<TPriority>
where
    TPriority: PartialOrd,
{
    queue: IndexedMinPriorityQueue<TPriority>,
}

impl<TPriority: PartialOrd> Iterator for IndexedMinPriorityQueueIterator<TPriority> {
    type Item = (usize, TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.extract_min()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

impl<TPriority: PartialOrd> ExactSizeIterator for IndexedMinPriorityQueueIterator<TPriority> {}

/// This is unordered borrowing iterator over queue.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct IndexedMinPriorityQueueBorrowIter<'a, TPriority>
where
    TPriority: 'a,
{
    heap_iterator: BinaryHeapIterator<'a, TPriority>,
}

impl<'a, TPriority: 'a> Iterator for IndexedMinPriorityQueueBorrowIter<'a, TPriority> {
    type Item = (usize, &'a TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.heap_iterator.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap_iterator.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap_iterator.count()
    }
}

impl<'a, TPriority: 'a> ExactSizeIterator for IndexedMinPriorityQueueBorrowIter<'a, TPriority> {}

/// This is error type for [`IndexedMinPriorityQueue`] and [`KeyIndexer`] methods.
///
/// Errors are reported before the structure is touched,
/// so it stays valid and usable after any of them.
///
/// [`IndexedMinPriorityQueue`]: struct.IndexedMinPriorityQueue.html
/// [`KeyIndexer`]: struct.KeyIndexer.html
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QueueError {
    /// Identifier is not below the capacity given at construction.
    IndexOutOfRange {
        /// Rejected identifier.
        index: usize,
        /// Capacity of the structure.
        capacity: usize,
    },
    /// Priority is not comparable with itself, e.g. NaN.
    UnorderedPriority,
    /// All identifiers of a [`KeyIndexer`] are already assigned.
    ///
    /// [`KeyIndexer`]: struct.KeyIndexer.html
    KeyspaceExhausted {
        /// Capacity of the indexer.
        capacity: usize,
    },
}

impl Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            QueueError::IndexOutOfRange { index, capacity } => write!(
                f,
                "Identifier {} is out of range for capacity {}",
                index, capacity
            ),
            QueueError::UnorderedPriority => {
                write!(f, "Priority can't be ordered against itself")
            }
            QueueError::KeyspaceExhausted { capacity } => {
                write!(f, "All {} identifiers are already assigned", capacity)
            }
        }
    }
}

impl std::error::Error for QueueError {}
