use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;

use pathsearch_core::heuristics::{chebyshev, diagonal_cost, manhattan, octile, Point};
use pathsearch_core::{Cost, Graph, WeightedGraph};

pub const WALL: char = '#';
pub const PATH_MARK: char = '*';

/// A rectangular character map. `#` is a wall; anything else is walkable.
/// Rows shorter than the widest row are padded with walls.
#[derive(Clone, Debug)]
pub struct GridMap {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl GridMap {
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        let rows: Vec<&str> = match rows.iter().rposition(|r| !r.is_empty()) {
            Some(last) => rows[..=last].to_vec(),
            None => bail!("map is empty"),
        };
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        if width == 0 {
            bail!("map has no columns");
        }
        let height = rows.len();
        let width_i = i32::try_from(width).context("map too wide")?;
        let height_i = i32::try_from(height).context("map too tall")?;

        let mut blocked = vec![true; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                blocked[y * width + x] = ch == WALL;
            }
        }
        Ok(Self { width: width_i, height: height_i, blocked })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading map {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing map {}", path.display()))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, (x, y): Point) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn is_walkable(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.blocked[cell_index(self.width, p)]
    }

    /// Draw the map with `path` overlaid.
    pub fn render(&self, path: &[Point]) -> String {
        let mut cells: Vec<char> = self.blocked.iter().map(|&b| if b { WALL } else { '.' }).collect();
        for &(x, y) in path {
            if self.in_bounds((x, y)) {
                cells[cell_index(self.width, (x, y))] = PATH_MARK;
            }
        }
        let mut out = String::with_capacity(cells.len() + self.height as usize);
        for row in cells.chunks(self.width as usize) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

// Row-major offset of an in-bounds cell. Computed in usize: width * height may
// exceed i32::MAX even when both dimensions fit.
fn cell_index(width: i32, (x, y): Point) -> usize {
    y as usize * width as usize + x as usize
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Chebyshev,
    Octile,
    Zero,
}

/// Search view over a [`GridMap`]: 4- or 8-connected, orthogonal steps cost
/// `step`, diagonal steps cost [`diagonal_cost`]. Diagonals may not cut
/// corners.
pub struct GridGraph<'a> {
    pub map: &'a GridMap,
    pub diagonal: bool,
    pub heuristic: HeuristicKind,
    pub step: Cost,
}

// Fixed order, cardinals before diagonals, so ties resolve the same way every run
const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

impl Graph for GridGraph<'_> {
    type Location = Point;

    fn neighbors(&self, &(x, y): &Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(8);
        for (dx, dy) in ORTHOGONAL {
            let next = (x + dx, y + dy);
            if self.map.is_walkable(next) {
                out.push(next);
            }
        }
        if self.diagonal {
            for (dx, dy) in DIAGONAL {
                let next = (x + dx, y + dy);
                if self.map.is_walkable(next)
                    && self.map.is_walkable((x + dx, y))
                    && self.map.is_walkable((x, y + dy))
                {
                    out.push(next);
                }
            }
        }
        out
    }
}

impl WeightedGraph for GridGraph<'_> {
    fn cost(&self, from: &Point, to: &Point) -> Cost {
        if from.0 != to.0 && from.1 != to.1 {
            diagonal_cost(self.step)
        } else {
            self.step
        }
    }

    fn heuristic(&self, goal: &Point, candidate: &Point) -> Cost {
        match self.heuristic {
            HeuristicKind::Manhattan => manhattan(*goal, *candidate, self.step),
            HeuristicKind::Chebyshev => chebyshev(*goal, *candidate, self.step),
            HeuristicKind::Octile => octile(*goal, *candidate, self.step),
            HeuristicKind::Zero => 0,
        }
    }
}

/// Parse `X,Y` (whitespace tolerated).
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
.....
.###.
.#...
";

    #[test]
    fn parses_dimensions_and_walls() {
        let m = GridMap::parse(MAP).unwrap();
        assert_eq!((m.width(), m.height()), (5, 3));
        assert!(m.is_walkable((0, 0)));
        assert!(!m.is_walkable((1, 1)));
        assert!(!m.is_walkable((5, 0)));
        assert!(!m.is_walkable((-1, 0)));
    }

    #[test]
    fn ragged_rows_are_padded_with_walls() {
        let m = GridMap::parse("...\n.\n").unwrap();
        assert_eq!(m.width(), 3);
        assert!(m.is_walkable((0, 1)));
        assert!(!m.is_walkable((2, 1)));
    }

    #[test]
    fn empty_map_is_error() {
        assert!(GridMap::parse("").is_err());
        assert!(GridMap::parse("\n\n").is_err());
    }

    #[test]
    fn diagonal_neighbors_do_not_cut_corners() {
        let m = GridMap::parse(MAP).unwrap();
        let g = GridGraph { map: &m, diagonal: true, heuristic: HeuristicKind::Octile, step: 10 };
        let n = g.neighbors(&(0, 0));
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
        assert!(!n.contains(&(1, 1)));
        assert_eq!(g.cost(&(0, 0), &(1, 1)), 14);
        assert_eq!(g.cost(&(0, 0), &(1, 0)), 10);
    }

    #[test]
    fn cell_index_does_not_wrap_past_i32() {
        assert_eq!(cell_index(5, (2, 1)), 7);
        let far = cell_index(50_000, (49_999, 49_999));
        assert_eq!(far, 2_499_999_999);
        assert!(far > i32::MAX as usize);
    }

    #[test]
    fn render_overlays_path() {
        let m = GridMap::parse("...\n.#.\n").unwrap();
        assert_eq!(m.render(&[(0, 0), (1, 0), (2, 0)]), "***\n.#.\n");
    }

    #[test]
    fn point_parsing() {
        assert_eq!(parse_point("3,4"), Ok((3, 4)));
        assert_eq!(parse_point(" -1 , 7 "), Ok((-1, 7)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,b").is_err());
    }
}
