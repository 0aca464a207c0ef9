use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::graph::Cost;

/// Budget the command-line front end applies when none is configured. The
/// engines themselves run unbounded unless a budget is set.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

/// How A* folds accumulated cost `g` and heuristic `h` into a frontier priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityCombine {
    /// `g + h`, standard A*.
    #[default]
    Additive,
    /// `g * h`. A zero heuristic or zero cost collapses the priority to 0, so
    /// the first path found is not guaranteed to be the cheapest.
    Multiplicative,
}

impl PriorityCombine {
    #[inline(always)]
    pub fn combine(self, g: Cost, h: Cost) -> Cost {
        match self {
            PriorityCombine::Additive => g + h,
            PriorityCombine::Multiplicative => g * h,
        }
    }
}

impl FromStr for PriorityCombine {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" | "add" | "sum" => Ok(PriorityCombine::Additive),
            "multiplicative" | "mul" | "product" => Ok(PriorityCombine::Multiplicative),
            other => Err(OptionsError::Invalid(format!("unknown priority combination '{other}'"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Upper bound on expanded locations before giving up. `None` runs until
    /// the goal is settled or the frontier is exhausted.
    pub max_expansions: Option<u64>,
    pub combine: PriorityCombine,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_expansions: None, combine: PriorityCombine::Additive }
    }
}

impl SearchOptions {
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    /// True once `expanded` has used up the budget.
    #[inline]
    pub fn budget_spent(&self, expanded: u64) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }

    pub fn with_combine(mut self, combine: PriorityCombine) -> Self {
        self.combine = combine;
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_expansions == Some(0) {
            return Err(OptionsError::Invalid("max_expansions must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse from JSON; absent fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, OptionsError> {
        let options: SearchOptions = serde_json::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| OptionsError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let o = SearchOptions::default();
        assert_eq!(o.max_expansions, None);
        assert_eq!(o.combine, PriorityCombine::Additive);
        assert!(o.validate().is_ok());
        assert!(!o.budget_spent(u64::MAX));
    }

    #[test]
    fn budget_counts_expansions() {
        let o = SearchOptions::default().with_max_expansions(3);
        assert!(!o.budget_spent(2));
        assert!(o.budget_spent(3));
        assert!(!o.unbounded().budget_spent(3));
    }

    #[test]
    fn deserializes_with_defaults_when_missing_fields() {
        let v = json!({ "combine": "multiplicative" });
        let o: SearchOptions = serde_json::from_value(v).unwrap();
        assert_eq!(o.combine, PriorityCombine::Multiplicative);
        assert_eq!(o.max_expansions, None);

        let o = SearchOptions::from_json_str("{}").unwrap();
        assert_eq!(o, SearchOptions::default());

        let o = SearchOptions::from_json_str(r#"{ "max_expansions": null }"#).unwrap();
        assert_eq!(o.max_expansions, None);
        let o = SearchOptions::from_json_str(r#"{ "max_expansions": 7 }"#).unwrap();
        assert_eq!(o.max_expansions, Some(7));
    }

    #[test]
    fn rejects_zero_expansion_budget() {
        let err = SearchOptions::from_json_str(r#"{ "max_expansions": 0 }"#).unwrap_err();
        assert!(matches!(err, OptionsError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_combine() {
        let err = SearchOptions::from_json_str(r#"{ "combine": "max" }"#).unwrap_err();
        assert!(matches!(err, OptionsError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SearchOptions::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, OptionsError::Io { .. }));
    }

    #[test]
    fn combine_from_str() {
        assert_eq!("Additive".parse::<PriorityCombine>().unwrap(), PriorityCombine::Additive);
        assert_eq!(" mul ".parse::<PriorityCombine>().unwrap(), PriorityCombine::Multiplicative);
        assert!("max".parse::<PriorityCombine>().is_err());
    }

    #[test]
    fn combine_arithmetic() {
        assert_eq!(PriorityCombine::Additive.combine(3, 4), 7);
        assert_eq!(PriorityCombine::Multiplicative.combine(3, 4), 12);
        assert_eq!(PriorityCombine::Multiplicative.combine(3, 0), 0);
    }
}
