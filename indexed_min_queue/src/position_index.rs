use crate::editable_binary_heap::HeapIndex;
use crate::indexed_min_queue::QueueError;

/// Identifier to heap position table.
/// `None` marks identifiers which are not in queue.
/// Also it centralizes range checking of identifiers coming from outside.
#[derive(Clone, Debug)]
pub(crate) struct PositionIndex {
    positions: Box<[Option<HeapIndex>]>,
}

impl PositionIndex {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: vec![None; capacity].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Returns `id` back if it can be used to index this table.
    #[inline(always)]
    pub(crate) fn check(&self, id: usize) -> Result<usize, QueueError> {
        if id < self.positions.len() {
            Ok(id)
        } else {
            log::debug!(
                "identifier {} rejected, capacity is {}",
                id,
                self.positions.len()
            );
            Err(QueueError::IndexOutOfRange {
                index: id,
                capacity: self.positions.len(),
            })
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: usize) -> Result<Option<HeapIndex>, QueueError> {
        let id = self.check(id)?;
        Ok(self.positions[id])
    }

    /// Records new position of identifier already validated by the queue.
    #[inline(always)]
    pub(crate) fn set(&mut self, id: usize, position: HeapIndex) {
        debug_assert!(id < self.positions.len(), "Heap holds unchecked identifier");
        self.positions[id] = Some(position);
    }

    #[inline(always)]
    pub(crate) fn vacate(&mut self, id: usize) {
        debug_assert!(id < self.positions.len(), "Heap holds unchecked identifier");
        self.positions[id] = None;
    }

    /// Marks every identifier absent. Always ***O(capacity)***.
    #[inline(always)]
    pub(crate) fn reset(&mut self) {
        for position in self.positions.iter_mut() {
            *position = None;
        }
    }

    #[cfg(test)]
    pub(crate) fn iter_present(&self) -> impl Iterator<Item = (usize, HeapIndex)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(id, position)| position.map(|p| (id, p)))
    }
}
