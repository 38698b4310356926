//! This is minimum priority queue over a fixed range of integer identifiers
//! which supports changing priority of queued identifiers in place.
//!
//! It uses own implementation of binary heap together with identifier to position table to achieve this.
//!
//! Each entry has associated *identifier* in range `0..capacity` and *priority*.
//! Identifiers are unique; priorities must implement `PartialOrd`
//! and values incomparable with themselves (NaN) are rejected.
//!
//! Extracting returns identifier with the smallest priority.
//! Inserting adds identifier to queue, inserting present identifier is no-op.
//! Priority of queued identifier can be decreased or increased.
//!
//! Insert, extract, decrease and increase have ***O(log n)*** time complexity;
//! peek, contains and priority lookup are ***O(1)***.
//! Construction and clearing take ***O(capacity)***.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra's algorithm][dijkstra] for 2D grid.
//! Entering each cell in grid has the cost.
//!
//! Grid cells map to identifiers `row * columns + column`,
//! so queue capacity is just the number of cells.
//! When cheaper path to a queued cell is found, its priority is decreased in place
//! instead of pushing a duplicate.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! ```
//! use indexed_min_queue::IndexedMinPriorityQueue;
//!
//! struct Field {
//!     rows: usize,
//!     columns: usize,
//!     costs: Box<[u32]>,
//! }
//!
//! // From cell we can move upper, right, bottom and left
//! fn get_neighbors(cell: usize, field: &Field) -> Vec<usize> {
//!     let (row, column) = (cell / field.columns, cell % field.columns);
//!     let mut items = Vec::with_capacity(4);
//!     if row > 0 {
//!         items.push(cell - field.columns);
//!     }
//!     if row + 1 < field.rows {
//!         items.push(cell + field.columns);
//!     }
//!     if column > 0 {
//!         items.push(cell - 1);
//!     }
//!     if column + 1 < field.columns {
//!         items.push(cell + 1);
//!     }
//!     items
//! }
//!
//! fn find_path(start: usize, target: usize, field: &Field) -> Option<u32> {
//!     let mut available = IndexedMinPriorityQueue::new(field.costs.len());
//!     // Cells whose cost is final
//!     let mut closed = vec![false; field.costs.len()];
//!     available.insert(start, field.costs[start]).ok()?;
//!     while let Some((current, cost)) = available.extract_min() {
//!         if current == target {
//!             return Some(cost);
//!         }
//!         closed[current] = true;
//!         for next in get_neighbors(current, field) {
//!             if closed[next] {
//!                 continue;
//!             }
//!             let candidate = cost + field.costs[next];
//!             // Inserting queued cell is no-op and decreasing absent one is no-op,
//!             // so both calls together keep the cheaper of old and new paths.
//!             if !available.insert(next, candidate).ok()? {
//!                 available.decrease_priority(next, candidate).ok()?;
//!             }
//!         }
//!     }
//!     None
//! }
//!
//! let field = Field {
//!     rows: 4,
//!     columns: 4,
//!     costs: vec![
//!         1, 3, 3, 6, //
//!         4, 4, 3, 8, //
//!         3, 1, 2, 4, //
//!         4, 8, 9, 4, //
//!     ].into_boxed_slice(),
//! };
//!
//! assert_eq!(find_path(0, 15, &field), Some(19));
//! ```
//!

mod editable_binary_heap;
mod indexed_min_queue;
mod key_indexer;
mod position_index;

pub use crate::indexed_min_queue::{
    IndexedMinPriorityQueue, IndexedMinPriorityQueueBorrowIter, IndexedMinPriorityQueueIterator,
    QueueError,
};
pub use crate::key_indexer::KeyIndexer;

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
