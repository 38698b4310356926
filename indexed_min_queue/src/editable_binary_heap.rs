use std::fmt::Debug;
use std::vec::Vec;

/// Position of an entry inside heap storage.
/// Kept separate from identifiers so the two can't be mixed up.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct HeapIndex(usize);

impl HeapIndex {
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn new(v: usize) -> Self {
        Self(v)
    }

    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        self.0
    }
}

pub(crate) struct HeapEntry<TPriority> {
    id: usize,
    priority: TPriority,
}

/// Array-backed binary min-heap.
///
/// Every method that moves entries reports each moved identifier
/// and its new position through `change_handler`,
/// so the caller can keep an identifier to position table in sync.
pub(crate) struct BinaryHeap<TPriority>
where
    TPriority: PartialOrd,
{
    data: Vec<HeapEntry<TPriority>>,
}

impl<TPriority: PartialOrd> BinaryHeap<TPriority> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Puts identifier and priority at the end and sifts it up.
    /// Time complexity - O(log n) swaps and change_handler calls
    #[inline(always)]
    pub(crate) fn push<TChangeHandler: FnMut(usize, HeapIndex)>(
        &mut self,
        id: usize,
        priority: TPriority,
        change_handler: TChangeHandler,
    ) {
        self.data.push(HeapEntry { id, priority });
        self.heapify_up(HeapIndex(self.data.len() - 1), change_handler);
    }

    /// Removes item with the smallest priority
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn pop<TChangeHandler: FnMut(usize, HeapIndex)>(
        &mut self,
        change_handler: TChangeHandler,
    ) -> Option<(usize, TPriority)> {
        let last = self.data.len().checked_sub(1)?;
        if last == 0 {
            let result = self.data.pop()?;
            return Some((result.id, result.priority));
        }
        self.swap_items(0, last);
        let result = self.data.pop()?;
        self.heapify_down(HeapIndex(0), change_handler);
        Some((result.id, result.priority))
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<(usize, &TPriority)> {
        self.look_into(HeapIndex(0))
    }

    #[inline(always)]
    pub(crate) fn look_into(&self, position: HeapIndex) -> Option<(usize, &TPriority)> {
        let entry = self.data.get(position.0)?;
        Some((entry.id, &entry.priority))
    }

    /// Lowers priority of the entry at `position` and sifts it up.
    /// Returns false and leaves heap untouched if `updated` is not strictly smaller.
    pub(crate) fn decrease_priority<TChangeHandler: FnMut(usize, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        updated: TPriority,
        change_handler: TChangeHandler,
    ) -> bool {
        if position >= self.len() {
            panic!("Out of index during decreasing priority");
        }

        if updated >= self.data[position.0].priority {
            return false;
        }
        self.data[position.0].priority = updated;
        self.heapify_up(position, change_handler);
        true
    }

    /// Raises priority of the entry at `position` and sifts it down.
    /// Returns false and leaves heap untouched if `updated` is not strictly bigger.
    pub(crate) fn increase_priority<TChangeHandler: FnMut(usize, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        updated: TPriority,
        change_handler: TChangeHandler,
    ) -> bool {
        if position >= self.len() {
            panic!("Out of index during increasing priority");
        }

        if updated <= self.data[position.0].priority {
            return false;
        }
        self.data[position.0].priority = updated;
        self.heapify_down(position, change_handler);
        true
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> HeapIndex {
        HeapIndex(self.data.len())
    }

    #[inline(always)]
    pub(crate) fn usize_len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> BinaryHeapIterator<TPriority> {
        BinaryHeapIterator {
            inner: self.data.iter(),
        }
    }

    fn heapify_up<TChangeHandler: FnMut(usize, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_up");
        let mut position = position.0;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self.data[position].priority < self.data[parent_pos].priority {
                self.swap_items(parent_pos, position);
                change_handler(self.data[position].id, HeapIndex(position));
                position = parent_pos;
            } else {
                break;
            }
        }
        change_handler(self.data[position].id, HeapIndex(position));
    }

    fn heapify_down<TChangeHandler: FnMut(usize, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_down");
        let mut position = position.0;
        loop {
            let min_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                // Equal children resolve to the left one
                if child2 < self.data.len()
                    && self.data[child2].priority < self.data[child1].priority
                {
                    child2
                } else {
                    child1
                }
            };

            if self.data[min_child_idx].priority < self.data[position].priority {
                self.swap_items(position, min_child_idx);
                change_handler(self.data[position].id, HeapIndex(position));
                position = min_child_idx;
            } else {
                break;
            }
        }
        change_handler(self.data[position].id, HeapIndex(position));
    }

    #[inline(always)]
    fn swap_items(&mut self, pos1: usize, pos2: usize) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
    }
}

/// Walks entries in storage order, not in priority order.
pub(crate) struct BinaryHeapIterator<'a, TPriority> {
    inner: std::slice::Iter<'a, HeapEntry<TPriority>>,
}

impl<'a, TPriority> Iterator for BinaryHeapIterator<'a, TPriority> {
    type Item = (usize, &'a TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.id, &entry.priority))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.inner.count()
    }
}

impl<'a, TPriority> ExactSizeIterator for BinaryHeapIterator<'a, TPriority> {}

// Default implementations

impl<TPriority: Clone> Clone for HeapEntry<TPriority> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            priority: self.priority.clone(),
        }
    }
}

impl<TPriority: Copy> Copy for HeapEntry<TPriority> {}

impl<TPriority: Debug> Debug for HeapEntry<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{{id: {:?}, priority: {:?}}}", &self.id, &self.priority)
    }
}

impl<TPriority: Clone + PartialOrd> Clone for BinaryHeap<TPriority> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<TPriority: Debug + PartialOrd> Debug for BinaryHeap<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}
