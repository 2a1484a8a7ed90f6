//! Shortest-path search over open map cells. All edges cost 1, so a
//! priority search ordered by accumulated length is Dijkstra and BFS at
//! once.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::actions::Direction;
use crate::map::Position;

/// Shortest path from `start` to `goal` as unit steps, routing around
/// `blocked` cells. An unreachable goal yields an empty path; callers treat
/// that as "no directed move available", never as an error.
///
/// Exploration is confined to the bounding box of the blocked cells plus
/// both endpoints, inflated by one cell, so a map without a sealed border
/// cannot send the search wandering off the grid.
pub fn find_path(start: Position, goal: Position, blocked: &HashSet<Position>) -> Vec<Direction> {
    if start == goal {
        return Vec::new();
    }

    let bounds = Bounds::around(blocked, start, goal);

    let mut heap: BinaryHeap<Reverse<(u32, Position)>> = BinaryHeap::new();
    let mut visited: HashSet<Position> = HashSet::new();
    let mut parent: HashMap<Position, (Position, Direction)> = HashMap::new();

    heap.push(Reverse((0, start)));
    let mut found = false;
    while let Some(Reverse((cost, pos))) = heap.pop() {
        if pos == goal {
            found = true;
            break;
        }
        if !visited.insert(pos) {
            continue;
        }
        for direction in Direction::ALL {
            let next = pos.step(direction);
            if !bounds.contains(next) || blocked.contains(&next) || visited.contains(&next) {
                continue;
            }
            heap.push(Reverse((cost + 1, next)));
            // First discovery is along a shortest route: pops come out in
            // nondecreasing cost order.
            parent.entry(next).or_insert((pos, direction));
        }
    }

    if !found {
        return Vec::new();
    }

    let mut steps = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(&(prev, direction)) = parent.get(&current) else {
            return Vec::new();
        };
        steps.push(direction);
        current = prev;
    }
    steps.reverse();
    steps
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Bounds {
    fn around(blocked: &HashSet<Position>, start: Position, goal: Position) -> Self {
        let mut bounds = Self {
            min_x: start.x.min(goal.x),
            min_y: start.y.min(goal.y),
            max_x: start.x.max(goal.x),
            max_y: start.y.max(goal.y),
        };
        for p in blocked {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        bounds.min_x -= 1;
        bounds.min_y -= 1;
        bounds.max_x += 1;
        bounds.max_y += 1;
        bounds
    }

    fn contains(&self, p: Position) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
