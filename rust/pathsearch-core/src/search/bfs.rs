use std::collections::VecDeque;
use std::hash::Hash;
use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cancel::CancelToken;
use crate::graph::{Cost, FnGraph, Graph};
use crate::options::SearchOptions;

use super::path::reconstruct;
use super::result::{Outcome, SearchResult};

/// Breadth-first search over any [`Graph`], ignoring edge weights.
///
/// Shortest in hops; optimal for weighted graphs only when every edge costs
/// the same. The reported cost is the hop count.
pub struct BreadthFirstSearch<'g, G: Graph + ?Sized> {
    graph: &'g G,
    options: SearchOptions,
    cancel: Option<CancelToken>,
}

impl<'g, G: Graph + ?Sized> BreadthFirstSearch<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph, options: SearchOptions::default(), cancel: None }
    }

    /// Only `max_expansions` applies; `combine` is ignored.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn search(&self, start: &G::Location, goal: &G::Location) -> Vec<G::Location> {
        self.find_path(start, goal).into_path()
    }

    pub fn find_path(&self, start: &G::Location, goal: &G::Location) -> SearchResult<G::Location> {
        let t0 = Instant::now();
        let mut frontier: VecDeque<G::Location> = VecDeque::new();
        let mut came_from: FxHashMap<G::Location, G::Location> = FxHashMap::default();

        frontier.push_back(start.clone());
        came_from.insert(start.clone(), start.clone());

        let mut expanded: u64 = 0;
        let mut outcome = Outcome::Unreachable;

        while let Some(current) = frontier.pop_front() {
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
                if !came_from.contains_key(&next) {
                    came_from.insert(next.clone(), current.clone());
                    frontier.push_back(next);
                }
            }
        }

        let result = if outcome == Outcome::Found {
            let path = reconstruct(&came_from, start, goal);
            if path.is_empty() {
                SearchResult::empty(Outcome::Unreachable, expanded)
            } else {
                let hops = (path.len() - 1) as Cost;
                SearchResult::found(path, hops, expanded)
            }
        } else {
            SearchResult::empty(outcome, expanded)
        };

        debug!(
            outcome = result.outcome.as_str(),
            expanded,
            discovered = came_from.len(),
            frontier_left = frontier.len(),
            path_len = result.path.len(),
            duration_us = t0.elapsed().as_micros() as u64,
            "bfs_done"
        );
        result
    }
}

/// One-shot breadth-first search over a neighbor closure.
pub fn breadth_first_search<L, N>(start: &L, goal: &L, neighbors: N) -> Vec<L>
where
    L: Eq + Hash + Clone,
    N: Fn(&L) -> Vec<L>,
{
    let graph = FnGraph::unweighted(neighbors);
    BreadthFirstSearch::new(&graph).search(start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(n: &char) -> Vec<char> {
        match n {
            'A' => vec!['B', 'D'],
            'B' => vec!['A', 'C'],
            'C' => vec!['B', 'D'],
            'D' => vec!['C', 'A'],
            _ => vec![],
        }
    }

    #[test]
    fn cycle_of_four_takes_two_hops() {
        let path = breadth_first_search(&'A', &'C', square);
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(&'A'));
        assert_eq!(path.last(), Some(&'C'));
        assert!(path[1] == 'B' || path[1] == 'D');
    }

    #[test]
    fn first_discovered_predecessor_wins() {
        // B is listed before D, so the FIFO reaches C through B.
        assert_eq!(breadth_first_search(&'A', &'C', square), vec!['A', 'B', 'C']);
    }

    #[test]
    fn hop_count_is_cost() {
        let g = FnGraph::unweighted(square);
        let res = BreadthFirstSearch::new(&g).find_path(&'A', &'C');
        assert_eq!(res.cost, Some(2));
        assert!(res.is_found());
    }

    #[test]
    fn start_is_goal_and_unreachable() {
        assert_eq!(breadth_first_search(&'B', &'B', square), vec!['B']);
        assert!(breadth_first_search(&'A', &'Z', square).is_empty());
    }
}
