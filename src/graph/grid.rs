//! Implicit grid topology with blocked cells

use super::node::NodeId;
use super::topology::Topology;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Orthogonal movement offsets (up, down, left, right)
const CARDINAL: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal movement offsets
const DIAGONAL: [(i64, i64); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A rectangular grid whose neighbor relation is computed on demand
///
/// No adjacency is stored: a cell's neighbors are the 4 (or 8, with
/// [`with_diagonals`](GridMap::with_diagonals)) offset cells that fall
/// inside the bounds and are not blocked. Cardinal steps cost 1;
/// diagonal steps cost sqrt(2), which keeps the Euclidean estimate
/// admissible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridMap {
    rows: usize,
    cols: usize,
    blocked: HashSet<(usize, usize)>,
    diagonals: bool,
}

impl GridMap {
    /// Create an open grid with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            blocked: HashSet::new(),
            diagonals: false,
        }
    }

    /// Build a grid from row slices: 0 is passable, anything else is an
    /// obstacle
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.as_ref().iter().enumerate() {
                if cell != 0 {
                    grid.block(r, c);
                }
            }
        }
        grid
    }

    /// Allow 8-directional movement
    pub fn with_diagonals(mut self) -> Self {
        self.diagonals = true;
        self
    }

    /// Mark a cell as an obstacle
    pub fn block(&mut self, row: usize, col: usize) {
        self.blocked.insert((row, col));
    }

    /// Whether a cell is inside the bounds and not an obstacle
    pub fn is_passable(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && !self.blocked.contains(&(row, col))
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Decode a cell id back into (row, col)
    fn parse(id: &NodeId) -> Option<(usize, usize)> {
        let (row, col) = id.as_str().split_once(',')?;
        Some((row.parse().ok()?, col.parse().ok()?))
    }
}

impl Topology for GridMap {
    fn contains(&self, id: &NodeId) -> bool {
        match Self::parse(id) {
            Some((row, col)) => self.is_passable(row, col),
            None => false,
        }
    }

    fn neighbors_of(&self, id: &NodeId) -> Vec<(NodeId, f64)> {
        let Some((row, col)) = Self::parse(id) else {
            return Vec::new();
        };
        if !self.is_passable(row, col) {
            return Vec::new();
        }

        let mut out = Vec::new();
        let diagonal: &[(i64, i64)] = if self.diagonals { &DIAGONAL } else { &[] };
        for &(dr, dc) in CARDINAL.iter().chain(diagonal) {
            let (nr, nc) = (row as i64 + dr, col as i64 + dc);
            if nr < 0 || nc < 0 {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if !self.is_passable(nr, nc) {
                continue;
            }
            let cost = if dr != 0 && dc != 0 {
                std::f64::consts::SQRT_2
            } else {
                1.0
            };
            out.push((NodeId::cell(nr, nc), cost));
        }
        out
    }

    fn position(&self, id: &NodeId) -> Option<(f64, f64)> {
        Self::parse(id).map(|(row, col)| (row as f64, col as f64))
    }
}
