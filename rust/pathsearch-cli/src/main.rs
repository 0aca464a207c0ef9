use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use pathsearch_cli::config::{Config, LogFormat};
use pathsearch_cli::grid::{parse_point, GridMap, HeuristicKind};
use pathsearch_cli::{run, Algorithm, SearchRequest};
use pathsearch_core::heuristics::Point;
use pathsearch_core::{Cost, PriorityCombine};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CombineArg {
    Additive,
    Multiplicative,
}

impl From<CombineArg> for PriorityCombine {
    fn from(c: CombineArg) -> Self {
        match c {
            CombineArg::Additive => PriorityCombine::Additive,
            CombineArg::Multiplicative => PriorityCombine::Multiplicative,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pathsearch", version, about = "Run A* or breadth-first search over a character grid map")]
struct Args {
    /// Map file: one row per line, '#' marks a wall
    #[arg(long = "map", value_name = "PATH")]
    map: PathBuf,

    /// Start cell as X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    start: Point,

    /// Goal cell as X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    goal: Point,

    #[arg(long, value_enum, default_value_t = Algorithm::Astar)]
    algorithm: Algorithm,

    #[arg(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
    heuristic: HeuristicKind,

    /// Allow diagonal moves (8-connected)
    #[arg(long)]
    diagonal: bool,

    /// Cost of one orthogonal step
    #[arg(long, value_name = "N", default_value_t = 1)]
    step_cost: Cost,

    /// How A* combines cost and heuristic
    #[arg(long, value_enum)]
    combine: Option<CombineArg>,

    #[arg(long, value_name = "N")]
    max_expansions: Option<u64>,

    /// JSON file with search options
    #[arg(long = "options", value_name = "PATH")]
    options: Option<PathBuf>,

    /// Print the map with the path drawn on it to stderr
    #[arg(long)]
    render: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match cfg.log_format {
        LogFormat::Json => fmt().with_env_filter(filter).with_writer(std::io::stderr).json().init(),
        LogFormat::Text => fmt().with_env_filter(filter).with_writer(std::io::stderr).init(),
    }

    info!(?args, core_version = %pathsearch_core::version(), "starting pathsearch");

    let options = cfg.search_options(args.options.as_deref(), args.combine.map(Into::into), args.max_expansions)?;
    let map = GridMap::load(&args.map)?;
    let req = SearchRequest {
        start: args.start,
        goal: args.goal,
        algorithm: args.algorithm,
        heuristic: args.heuristic,
        diagonal: args.diagonal,
        step_cost: args.step_cost,
        options,
    };
    let result = run(&map, &req)?;

    let json = serde_json::to_string_pretty(&result).context("serializing result")?;
    println!("{json}");
    if args.render {
        eprint!("{}", map.render(&result.path));
    }
    Ok(())
}
