#![allow(dead_code)]

use std::collections::HashSet;

use pathsearch_core::heuristics::manhattan;
use pathsearch_core::{Cost, Graph, WeightedGraph};

pub type Cell = (i32, i32);

/// 4-connected grid with unit step cost.
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub walls: HashSet<Cell>,
    pub use_heuristic: bool,
}

impl Grid {
    pub fn open(width: i32, height: i32) -> Self {
        Self { width, height, walls: HashSet::new(), use_heuristic: false }
    }

    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Cell>) -> Self {
        self.walls.extend(walls);
        self
    }

    pub fn with_heuristic(mut self) -> Self {
        self.use_heuristic = true;
        self
    }

    fn passable(&self, c: Cell) -> bool {
        c.0 >= 0 && c.1 >= 0 && c.0 < self.width && c.1 < self.height && !self.walls.contains(&c)
    }
}

impl Graph for Grid {
    type Location = Cell;

    fn neighbors(&self, &(x, y): &Cell) -> Vec<Cell> {
        [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
            .into_iter()
            .filter(|c| self.passable(*c))
            .collect()
    }
}

impl WeightedGraph for Grid {
    fn cost(&self, _from: &Cell, _to: &Cell) -> Cost {
        1
    }

    fn heuristic(&self, goal: &Cell, candidate: &Cell) -> Cost {
        if self.use_heuristic { manhattan(*goal, *candidate, 1) } else { 0 }
    }
}

pub fn assert_steps_are_adjacent(path: &[Cell]) {
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        assert_eq!((a.0 - b.0).abs() + (a.1 - b.1).abs(), 1, "non-adjacent step {:?} -> {:?}", a, b);
    }
}
