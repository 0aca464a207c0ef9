use serde::Serialize;

use crate::graph::Cost;

/// Why a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Found,
    /// The frontier ran dry before the goal was popped.
    Unreachable,
    ExpansionLimit,
    Cancelled,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Found => "found",
            Outcome::Unreachable => "unreachable",
            Outcome::ExpansionLimit => "expansion-limit",
            Outcome::Cancelled => "cancelled",
        }
    }
}

/// Path from start to goal, both inclusive.
///
/// Any outcome other than [`Outcome::Found`] carries an empty path and no
/// cost. `start == goal` is found with `path == [start]` and cost 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult<L> {
    pub path: Vec<L>,
    pub cost: Option<Cost>,
    pub expanded: u64,
    pub outcome: Outcome,
}

impl<L> SearchResult<L> {
    pub(crate) fn found(path: Vec<L>, cost: Cost, expanded: u64) -> Self {
        Self { path, cost: Some(cost), expanded, outcome: Outcome::Found }
    }

    pub(crate) fn empty(outcome: Outcome, expanded: u64) -> Self {
        Self { path: Vec::new(), cost: None, expanded, outcome }
    }

    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Number of locations on the path, including start and goal.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn into_path(self) -> Vec<L> {
        self.path
    }
}
