use std::cmp::Reverse;
use std::ops::Index;

#[derive(Eq, PartialEq, Debug, Hash, Copy, Clone, Ord, PartialOrd)]
struct Position {
    row: usize,
    column: usize,
}

struct Field {
    rows: usize,
    columns: usize,
    costs: Box<[u32]>,
}

impl Field {
    fn cell_id(&self, pos: Position) -> usize {
        self.columns * pos.row + pos.column
    }
}

impl Index<Position> for Field {
    type Output = u32;

    fn index(&self, index: Position) -> &Self::Output {
        &self.costs[self.cell_id(index)]
    }
}

struct Neighbours {
    len: usize,
    items: [Position; 8],
}

fn get_neighbors(pos: Position, field: &Field) -> Neighbours {
    let mut items = [pos; 8];
    let mut length = 0usize;
    if pos.row > 0 {
        items[length].row -= 1;
        length += 1;
    }
    if pos.row + 1 < field.rows {
        items[length].row += 1;
        length += 1;
    }
    if pos.column > 0 {
        items[length].column -= 1;
        length += 1;
    }
    if pos.column + 1 < field.columns {
        items[length].column += 1;
        length += 1;
    }

    if pos.row > 0 && pos.column > 0 {
        items[length].row -= 1;
        items[length].column -= 1;
        length += 1
    }

    if pos.row > 0 && pos.column + 1 < field.columns {
        items[length].row -= 1;
        items[length].column += 1;
        length += 1
    }

    if pos.row + 1 < field.rows && pos.column > 0 {
        items[length].row += 1;
        items[length].column -= 1;
        length += 1
    }

    if pos.row + 1 < field.rows && pos.column + 1 < field.columns {
        items[length].row += 1;
        items[length].column += 1;
        length += 1
    }

    Neighbours { len: length, items }
}

mod std_dijkstra {
    use super::*;
    use std::collections::BinaryHeap;

    pub(crate) fn find_cost(start: Position, target: Position, field: &Field) -> Option<usize> {
        let mut best = vec![usize::MAX; field.costs.len()];
        let mut closed = vec![false; field.costs.len()];
        // Same cell can be pushed many times, stale copies are skipped on pop
        let mut available: BinaryHeap<Reverse<(usize, Position)>> = BinaryHeap::new();
        best[field.cell_id(start)] = 0;
        available.push(Reverse((0, start)));
        while let Some(Reverse((current_cost, current_pos))) = available.pop() {
            if current_pos == target {
                return Some(current_cost);
            }
            let current_id = field.cell_id(current_pos);
            if closed[current_id] {
                continue;
            }
            closed[current_id] = true;

            let neighbours = get_neighbors(current_pos, field);
            for &next in neighbours.items[..neighbours.len].iter() {
                let next_id = field.cell_id(next);
                let cost = current_cost + field[next] as usize;
                if !closed[next_id] && cost < best[next_id] {
                    best[next_id] = cost;
                    available.push(Reverse((cost, next)));
                }
            }
        }
        None
    }
}

mod indexed_dijkstra {
    use super::*;
    use indexed_min_queue::IndexedMinPriorityQueue;

    pub(crate) fn find_cost(start: Position, target: Position, field: &Field) -> Option<usize> {
        let mut closed = vec![false; field.costs.len()];
        let mut available = IndexedMinPriorityQueue::new(field.costs.len());
        available.insert(field.cell_id(start), 0usize).ok()?;
        while let Some((current_id, current_cost)) = available.extract_min() {
            let current_pos = Position {
                row: current_id / field.columns,
                column: current_id % field.columns,
            };
            if current_pos == target {
                return Some(current_cost);
            }
            closed[current_id] = true;

            let neighbours = get_neighbors(current_pos, field);
            for &next in neighbours.items[..neighbours.len].iter() {
                let next_id = field.cell_id(next);
                if closed[next_id] {
                    continue;
                }
                let cost = current_cost + field[next] as usize;
                if !available.insert(next_id, cost).ok()? {
                    available.decrease_priority(next_id, cost).ok()?;
                }
            }
        }
        None
    }
}

mod keyed_dijkstra {
    use super::*;
    use indexed_min_queue::{IndexedMinPriorityQueue, KeyIndexer};
    use rustc_hash::FxHasher;
    use std::hash::BuildHasherDefault;

    // Positions are assigned identifiers on first sight instead of computing them.
    pub(crate) fn find_cost(start: Position, target: Position, field: &Field) -> Option<usize> {
        let mut ids: KeyIndexer<Position, BuildHasherDefault<FxHasher>> =
            KeyIndexer::with_capacity_and_hasher(field.costs.len(), Default::default());
        let mut closed = vec![false; field.costs.len()];
        let mut available = IndexedMinPriorityQueue::new(field.costs.len());
        available.insert(ids.get_or_insert(start).ok()?, 0usize).ok()?;
        while let Some((current_id, current_cost)) = available.extract_min() {
            let current_pos = *ids.key(current_id)?;
            if current_pos == target {
                return Some(current_cost);
            }
            closed[current_id] = true;

            let neighbours = get_neighbors(current_pos, field);
            for &next in neighbours.items[..neighbours.len].iter() {
                let next_id = ids.get_or_insert(next).ok()?;
                if closed[next_id] {
                    continue;
                }
                let cost = current_cost + field[next] as usize;
                if !available.insert(next_id, cost).ok()? {
                    available.decrease_priority(next_id, cost).ok()?;
                }
            }
        }
        None
    }
}

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_field(size: usize) -> Field {
    const SEED: u64 = 546579634698731;
    use rand::prelude::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let dist = rand::distributions::Uniform::new_inclusive(1u32, 10u32);
    let vec: Vec<u32> = (0..size * size).map(|_| rng.sample(dist)).collect();
    Field {
        columns: size,
        rows: size,
        costs: vec.into(),
    }
}

fn find_cost_benchmark(c: &mut Criterion) {
    let field = generate_field(100);
    let start = Position { row: 0, column: 0 };
    let check = Position { row: 99, column: 99 };
    assert_eq!(
        std_dijkstra::find_cost(start, check, &field),
        indexed_dijkstra::find_cost(start, check, &field)
    );
    assert_eq!(
        std_dijkstra::find_cost(start, check, &field),
        keyed_dijkstra::find_cost(start, check, &field)
    );

    let mut group = c.benchmark_group("Dijkstra");
    for &end in &[1, 5, 10, 25, 45, 49, 99] {
        let stop_at = Position {
            row: end,
            column: end,
        };
        group.bench_with_input(
            BenchmarkId::new("STD Dijkstra", end),
            &(start, stop_at, &field),
            |b, &i| b.iter(|| std_dijkstra::find_cost(i.0, i.1, i.2)),
        );
        group.bench_with_input(
            BenchmarkId::new("Indexed Dijkstra", end),
            &(start, stop_at, &field),
            |b, &i| b.iter(|| indexed_dijkstra::find_cost(i.0, i.1, i.2)),
        );
        group.bench_with_input(
            BenchmarkId::new("Keyed Indexed Dijkstra", end),
            &(start, stop_at, &field),
            |b, &i| b.iter(|| keyed_dijkstra::find_cost(i.0, i.1, i.2)),
        );
    }
    const BIG_SIZE: usize = 500;
    let field_eq = Field {
        columns: BIG_SIZE,
        rows: BIG_SIZE,
        costs: vec![1; BIG_SIZE * BIG_SIZE].into_boxed_slice(),
    };

    let stop_at = Position {
        row: BIG_SIZE - 1,
        column: BIG_SIZE - 1,
    };
    group.bench_with_input(
        BenchmarkId::new("STD Dijkstra Ones field", BIG_SIZE),
        &(start, stop_at, &field_eq),
        |b, &i| b.iter(|| std_dijkstra::find_cost(i.0, i.1, i.2)),
    );
    group.bench_with_input(
        BenchmarkId::new("Indexed Dijkstra Ones field", BIG_SIZE),
        &(start, stop_at, &field_eq),
        |b, &i| b.iter(|| indexed_dijkstra::find_cost(i.0, i.1, i.2)),
    );

    group.finish();
}

criterion_group!(benches, find_cost_benchmark);
criterion_main!(benches);
