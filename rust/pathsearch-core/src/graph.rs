use std::hash::Hash;
use std::marker::PhantomData;

/// Accumulated path cost or heuristic estimate.
pub type Cost = i64;

/// Adjacency half of the callback contract.
///
/// `neighbors` must terminate. Self-loops are tolerated.
pub trait Graph {
    type Location: Eq + Hash + Clone;

    fn neighbors(&self, location: &Self::Location) -> Vec<Self::Location>;
}

/// Weighted half of the callback contract.
///
/// `cost` is only called for pairs returned by `neighbors` and must be
/// non-negative. `heuristic(goal, candidate)` estimates the remaining cost;
/// it should be admissible and consistent for the cheapest path to be found
/// first. Neither property is checked.
pub trait WeightedGraph: Graph {
    fn cost(&self, from: &Self::Location, to: &Self::Location) -> Cost;

    fn heuristic(&self, goal: &Self::Location, candidate: &Self::Location) -> Cost;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Location = G::Location;

    fn neighbors(&self, location: &Self::Location) -> Vec<Self::Location> {
        (**self).neighbors(location)
    }
}

impl<G: WeightedGraph + ?Sized> WeightedGraph for &G {
    fn cost(&self, from: &Self::Location, to: &Self::Location) -> Cost {
        (**self).cost(from, to)
    }

    fn heuristic(&self, goal: &Self::Location, candidate: &Self::Location) -> Cost {
        (**self).heuristic(goal, candidate)
    }
}

/// A graph described entirely by three closures.
pub struct FnGraph<L, N, C, H> {
    neighbors: N,
    cost: C,
    heuristic: H,
    _location: PhantomData<fn(&L) -> L>,
}

/// Fn-pointer type used for the cost and heuristic of [`FnGraph::unweighted`].
pub type EdgeFn<L> = fn(&L, &L) -> Cost;

impl<L, N, C, H> FnGraph<L, N, C, H>
where
    N: Fn(&L) -> Vec<L>,
    C: Fn(&L, &L) -> Cost,
    H: Fn(&L, &L) -> Cost,
{
    pub fn new(neighbors: N, cost: C, heuristic: H) -> Self {
        Self { neighbors, cost, heuristic, _location: PhantomData }
    }
}

impl<L, N> FnGraph<L, N, EdgeFn<L>, EdgeFn<L>>
where
    N: Fn(&L) -> Vec<L>,
{
    /// Unit edge costs and a zero heuristic.
    pub fn unweighted(neighbors: N) -> Self {
        Self { neighbors, cost: unit_cost::<L>, heuristic: zero_heuristic::<L>, _location: PhantomData }
    }
}

fn unit_cost<L>(_from: &L, _to: &L) -> Cost {
    1
}

fn zero_heuristic<L>(_goal: &L, _candidate: &L) -> Cost {
    0
}

impl<L, N, C, H> Graph for FnGraph<L, N, C, H>
where
    L: Eq + Hash + Clone,
    N: Fn(&L) -> Vec<L>,
{
    type Location = L;

    #[inline]
    fn neighbors(&self, location: &L) -> Vec<L> {
        (self.neighbors)(location)
    }
}

impl<L, N, C, H> WeightedGraph for FnGraph<L, N, C, H>
where
    L: Eq + Hash + Clone,
    N: Fn(&L) -> Vec<L>,
    C: Fn(&L, &L) -> Cost,
    H: Fn(&L, &L) -> Cost,
{
    #[inline]
    fn cost(&self, from: &L, to: &L) -> Cost {
        (self.cost)(from, to)
    }

    #[inline]
    fn heuristic(&self, goal: &L, candidate: &L) -> Cost {
        (self.heuristic)(goal, candidate)
    }
}
