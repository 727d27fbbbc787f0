//! Optimal shortest-path search.

use crate::path::Path;
use crate::policy::{is_walkable, walkable_neighbours, DoorRule};
use rove_core::Position;
use rove_world::WorldSnapshot;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Find a shortest path from `start` to `goal`, doors treated as passable.
///
/// A* over the 4-connected grid with unit step cost and the Manhattan
/// heuristic, which is admissible and consistent here, so the first time
/// the goal is finalized its path is provably shortest. Closed doors count
/// as walkable ([`DoorRule::Passable`]) — the search models an agent that
/// could open them en route.
///
/// The frontier is a min-heap keyed by `(f, g, position)`: `f = g + h`
/// first, the accumulated cost `g` as tie-break, and the position as a
/// final deterministic tie-break so identical queries on identical
/// snapshots reconstruct identical paths.
///
/// Returns the single-cell path when `start == goal`, and `None` when the
/// goal is not walkable or the frontier drains without reaching it — an
/// expected outcome for disconnected layouts, not an error.
pub fn find_path(world: &WorldSnapshot, start: Position, goal: Position) -> Option<Path> {
    if start == goal {
        return Some(Path::single(start));
    }
    if !is_walkable(world, goal, DoorRule::Passable) {
        return None;
    }

    let mut open: BinaryHeap<Reverse<(u32, u32, Position)>> = BinaryHeap::new();
    let mut best_g: HashMap<Position, u32> = HashMap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut closed: HashSet<Position> = HashSet::new();

    open.push(Reverse((start.manhattan(goal), 0, start)));
    best_g.insert(start, 0);

    while let Some(Reverse((_, g, current))) = open.pop() {
        if !closed.insert(current) {
            continue;
        }
        if current == goal {
            return Some(reconstruct(&came_from, start, goal));
        }
        for next in walkable_neighbours(world, current, DoorRule::Passable) {
            if closed.contains(&next) {
                continue;
            }
            let tentative = g + 1;
            if best_g.get(&next).is_some_and(|&known| known <= tentative) {
                continue;
            }
            best_g.insert(next, tentative);
            came_from.insert(next, current);
            open.push(Reverse((tentative + next.manhattan(goal), tentative, next)));
        }
    }

    None
}

/// Walk the parent links back from `goal` and reverse into a forward path.
fn reconstruct(came_from: &HashMap<Position, Position>, start: Position, goal: Position) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while current != start {
        current = came_from[&current];
        cells.push(current);
    }
    cells.reverse();
    Path { cells }
}
