pub mod config;
pub mod grid;

use anyhow::{ensure, Result};
use clap::ValueEnum;
use tracing::info;

use pathsearch_core::heuristics::Point;
use pathsearch_core::{AStar, BreadthFirstSearch, Cost, SearchOptions, SearchResult};

use grid::{GridGraph, GridMap, HeuristicKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    #[default]
    Astar,
    Bfs,
}

#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub start: Point,
    pub goal: Point,
    pub algorithm: Algorithm,
    pub heuristic: HeuristicKind,
    pub diagonal: bool,
    pub step_cost: Cost,
    pub options: SearchOptions,
}

/// Run one search over `map`. Endpoints must be walkable cells.
pub fn run(map: &GridMap, req: &SearchRequest) -> Result<SearchResult<Point>> {
    ensure!(map.is_walkable(req.start), "start {:?} is outside the map or a wall", req.start);
    ensure!(map.is_walkable(req.goal), "goal {:?} is outside the map or a wall", req.goal);
    ensure!(req.step_cost > 0, "step cost must be positive, got {}", req.step_cost);

    let graph = GridGraph { map, diagonal: req.diagonal, heuristic: req.heuristic, step: req.step_cost };
    let result = match req.algorithm {
        Algorithm::Astar => AStar::new(&graph).with_options(req.options.clone()).find_path(&req.start, &req.goal),
        Algorithm::Bfs => BreadthFirstSearch::new(&graph).with_options(req.options.clone()).find_path(&req.start, &req.goal),
    };
    info!(
        algorithm = ?req.algorithm,
        outcome = result.outcome.as_str(),
        expanded = result.expanded,
        path_len = result.path.len(),
        cost = ?result.cost,
        "search done"
    );
    Ok(result)
}
