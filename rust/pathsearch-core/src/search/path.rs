use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Walk `came_from` back from `goal` to `start` and return the path in
/// start-to-goal order, both ends included.
///
/// `came_from[start] == start` is the sentinel. Returns an empty path when
/// `goal` was never discovered or the chain is broken or cyclic.
pub(crate) fn reconstruct<L>(came_from: &FxHashMap<L, L>, start: &L, goal: &L) -> Vec<L>
where
    L: Eq + Hash + Clone,
{
    if !came_from.contains_key(goal) {
        return Vec::new();
    }
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while current != start {
        let Some(prev) = came_from.get(current) else {
            return Vec::new();
        };
        // A chain longer than the map can only come from a cycle (negative edges).
        if path.len() > came_from.len() {
            return Vec::new();
        }
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}
