use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use pathsearch_core::options::DEFAULT_MAX_EXPANSIONS;
use pathsearch_core::{PriorityCombine, SearchOptions};

pub const ENV_OPTIONS: &str = "PATHSEARCH_OPTIONS";
pub const ENV_MAX_EXPANSIONS: &str = "PATHSEARCH_MAX_EXPANSIONS";
pub const ENV_COMBINE: &str = "PATHSEARCH_COMBINE";
pub const ENV_LOG_FORMAT: &str = "PATHSEARCH_LOG_FORMAT";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from the environment. Command-line flags win over these,
/// and these win over an options file.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub options_path: Option<PathBuf>,
    pub max_expansions: Option<u64>,
    pub combine: Option<PriorityCombine>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let options_path = get(ENV_OPTIONS).filter(|s| !s.is_empty()).map(PathBuf::from);
        let max_expansions = get(ENV_MAX_EXPANSIONS)
            .map(|s| s.trim().parse::<u64>().with_context(|| format!("{ENV_MAX_EXPANSIONS}={s}")))
            .transpose()?;
        let combine = get(ENV_COMBINE)
            .map(|s| s.parse::<PriorityCombine>().with_context(|| format!("{ENV_COMBINE}={s}")))
            .transpose()?;
        let log_format = match get(ENV_LOG_FORMAT).as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("{ENV_LOG_FORMAT}={other}: expected 'text' or 'json'"),
        };
        Ok(Self { options_path, max_expansions, combine, log_format })
    }

    /// Layer options file, environment and flags, then validate. A run with
    /// no budget from any layer gets [`DEFAULT_MAX_EXPANSIONS`].
    pub fn search_options(
        &self,
        options_file: Option<&Path>,
        combine: Option<PriorityCombine>,
        max_expansions: Option<u64>,
    ) -> Result<SearchOptions> {
        let mut options = match options_file.or(self.options_path.as_deref()) {
            Some(path) => SearchOptions::from_json_file(path)?,
            None => SearchOptions::default(),
        };
        if let Some(n) = max_expansions.or(self.max_expansions) {
            options.max_expansions = Some(n);
        }
        if options.max_expansions.is_none() {
            options.max_expansions = Some(DEFAULT_MAX_EXPANSIONS);
        }
        if let Some(c) = combine.or(self.combine) {
            options.combine = c;
        }
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Text);
        let opts = cfg.search_options(None, None, None).unwrap();
        assert_eq!(opts, SearchOptions::default().with_max_expansions(DEFAULT_MAX_EXPANSIONS));
    }

    #[test]
    fn environment_values_are_parsed() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_MAX_EXPANSIONS, "500"),
            (ENV_COMBINE, "multiplicative"),
            (ENV_LOG_FORMAT, "json"),
        ]))
        .unwrap();
        assert_eq!(cfg.max_expansions, Some(500));
        assert_eq!(cfg.combine, Some(PriorityCombine::Multiplicative));
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn flags_override_environment() {
        let cfg = Config::from_lookup(lookup(&[(ENV_MAX_EXPANSIONS, "500")])).unwrap();
        let opts = cfg.search_options(None, Some(PriorityCombine::Additive), Some(42)).unwrap();
        assert_eq!(opts.max_expansions, Some(42));

        let opts = cfg.search_options(None, None, None).unwrap();
        assert_eq!(opts.max_expansions, Some(500));
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(Config::from_lookup(lookup(&[(ENV_MAX_EXPANSIONS, "lots")])).is_err());
        assert!(Config::from_lookup(lookup(&[(ENV_COMBINE, "max")])).is_err());
        assert!(Config::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).is_err());

        let cfg = Config::from_lookup(lookup(&[(ENV_MAX_EXPANSIONS, "0")])).unwrap();
        assert!(cfg.search_options(None, None, None).is_err());
    }
}
