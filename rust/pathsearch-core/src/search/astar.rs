use std::hash::Hash;
use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cancel::CancelToken;
use crate::graph::{Cost, FnGraph, WeightedGraph};
use crate::options::SearchOptions;
use crate::priority_queue::PriorityQueue;

use super::path::reconstruct;
use super::result::{Outcome, SearchResult};

/// Best-first search over a [`WeightedGraph`].
///
/// Frontier entries carry the `g` they were pushed with; an entry whose `g`
/// is worse than the current `cost_so_far` is stale and dropped on pop
/// without being expanded.
pub struct AStar<'g, G: WeightedGraph + ?Sized> {
    graph: &'g G,
    options: SearchOptions,
    cancel: Option<CancelToken>,
}

impl<'g, G: WeightedGraph + ?Sized> AStar<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph, options: SearchOptions::default(), cancel: None }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Path from `start` to `goal` inclusive, or empty when unreachable.
    pub fn search(&self, start: &G::Location, goal: &G::Location) -> Vec<G::Location> {
        self.find_path(start, goal).into_path()
    }

    pub fn find_path(&self, start: &G::Location, goal: &G::Location) -> SearchResult<G::Location> {
        let t0 = Instant::now();
        let combine = self.options.combine;

        let mut frontier: PriorityQueue<(G::Location, Cost), Cost> = PriorityQueue::new();
        let mut cost_so_far: FxHashMap<G::Location, Cost> = FxHashMap::default();
        let mut came_from: FxHashMap<G::Location, G::Location> = FxHashMap::default();

        frontier.put((start.clone(), 0), 0);
        cost_so_far.insert(start.clone(), 0);
        came_from.insert(start.clone(), start.clone());

        let mut expanded: u64 = 0;
        let mut stale: u64 = 0;
        let mut outcome = Outcome::Unreachable;

        while let Some((current, g)) = frontier.get() {
            if cost_so_far.get(&current).is_some_and(|&best| g > best) {
                stale += 1;
                continue;
            }
            if current == *goal {
                outcome = Outcome::Found;
                break;
            }
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                outcome = Outcome::Cancelled;
                break;
            }
            if self.options.budget_spent(expanded) {
                outcome = Outcome::ExpansionLimit;
                break;
            }
            expanded += 1;

            for next in self.graph.neighbors(&current) {
                let new_cost = g + self.graph.cost(&current, &next);
                let improves = cost_so_far.get(&next).map_or(true, |&best| new_cost < best);
                if improves {
                    cost_so_far.insert(next.clone(), new_cost);
                    came_from.insert(next.clone(), current.clone());
                    let priority = combine.combine(new_cost, self.graph.heuristic(goal, &next));
                    frontier.put((next, new_cost), priority);
                }
            }
        }

        let result = match (outcome, cost_so_far.get(goal)) {
            (Outcome::Found, Some(&cost)) => {
                let path = reconstruct(&came_from, start, goal);
                if path.is_empty() {
                    SearchResult::empty(Outcome::Unreachable, expanded)
                } else {
                    SearchResult::found(path, cost, expanded)
                }
            }
            (Outcome::Found, None) => SearchResult::empty(Outcome::Unreachable, expanded),
            (other, _) => SearchResult::empty(other, expanded),
        };

        debug!(
            outcome = result.outcome.as_str(),
            expanded,
            stale,
            discovered = cost_so_far.len(),
            frontier_left = frontier.len(),
            path_len = result.path.len(),
            cost = ?result.cost,
            duration_us = t0.elapsed().as_micros() as u64,
            "astar_done"
        );
        result
    }
}

/// One-shot A* over three closures. Returns the inclusive path, or an empty
/// vector when `goal` is unreachable.
pub fn astar_search<L, N, C, H>(start: &L, goal: &L, neighbors: N, cost: C, heuristic: H) -> Vec<L>
where
    L: Eq + Hash + Clone,
    N: Fn(&L) -> Vec<L>,
    C: Fn(&L, &L) -> Cost,
    H: Fn(&L, &L) -> Cost,
{
    let graph = FnGraph::<L, N, C, H>::new(neighbors, cost, heuristic);
    AStar::new(&graph).search(start, goal)
}
