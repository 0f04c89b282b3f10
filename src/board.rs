//! Displayed board state and the clearing rules.
//!
//! A [`Board`] layers a cleared mask over an immutable [`Grid`]. A cell is
//! displayed blank if it was never filled or has been cleared; the original
//! color is always recoverable, which undo and the parity rewind rely on.
//!
//! The rules:
//! - `Board::collect` looks out from a blank cell along its row and column
//!   and returns the nearest tile in each direction, seeing through blanks.
//! - `Board::matches` keeps the collected tiles whose color appears at
//!   least twice among them. A move is legal iff that set is non-empty.

use tracing::trace;

use crate::grid::{Cell, Color, Grid, Point};

/// Displayed state of a game: the original grid plus which tiles are cleared.
///
/// Per-point queries are crate-private; outside callers go through the
/// bounds-checked methods on [`crate::game::Game`].
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    cleared: Vec<bool>,
}

impl Board {
    pub fn new(grid: Grid) -> Self {
        let cleared = vec![false; grid.len()];
        Self { grid, cleared }
    }

    /// The original layout, ignoring clears.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Displayed state of `pt`. Panics if `pt` is out of bounds.
    #[inline]
    pub(crate) fn cell(&self, pt: Point) -> Cell {
        if self.cleared[pt] {
            Cell::Blank
        } else {
            self.grid.cell(pt)
        }
    }

    #[inline]
    pub(crate) fn is_blank(&self, pt: Point) -> bool {
        self.cell(pt).is_blank()
    }

    /// Displayed state of every cell, in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        (0..self.grid.len()).map(|pt| self.cell(pt)).collect()
    }

    /// Nearest tile above, below, left and right of the blank cell `pt`.
    ///
    /// Returns nothing if `pt` itself holds a tile.
    pub(crate) fn collect(&self, pt: Point) -> Vec<Point> {
        if !self.is_blank(pt) {
            return Vec::new();
        }
        let (row, col) = self.grid.row_col(pt);
        let (h, w) = (self.grid.height(), self.grid.width());

        let rays = [
            self.first_tile((0..row).rev().map(|r| r * w + col)),
            self.first_tile((row + 1..h).map(|r| r * w + col)),
            self.first_tile((0..col).rev().map(|c| row * w + c)),
            self.first_tile((col + 1..w).map(|c| row * w + c)),
        ];
        let collected: Vec<Point> = rays.into_iter().flatten().collect();
        trace!(pt, ?collected, "collect");
        collected
    }

    fn first_tile(&self, mut ray: impl Iterator<Item = Point>) -> Option<Point> {
        ray.find(|&p| !self.is_blank(p))
    }

    /// Subset of `collected` whose color is shared by another collected tile.
    ///
    /// The result is empty or has 2, 3 or 4 points, in collection order.
    pub(crate) fn matches(&self, collected: &[Point]) -> Vec<Point> {
        let colors: Vec<Option<Color>> = collected.iter().map(|&p| self.cell(p).color()).collect();
        collected
            .iter()
            .zip(&colors)
            .filter(|(_, color)| {
                color.is_some() && colors.iter().filter(|&other| other == *color).count() >= 2
            })
            .map(|(&p, _)| p)
            .collect()
    }

    /// Tiles a click on `pt` would clear.
    #[inline]
    pub(crate) fn clear_set(&self, pt: Point) -> Vec<Point> {
        self.matches(&self.collect(pt))
    }

    /// Whether any blank cell has a non-empty clear set.
    pub fn has_legal_move(&self) -> bool {
        (0..self.grid.len()).any(|pt| self.is_blank(pt) && !self.clear_set(pt).is_empty())
    }

    /// Every blank cell with a non-empty clear set.
    pub fn legal_moves(&self) -> Vec<Point> {
        (0..self.grid.len())
            .filter(|&pt| self.is_blank(pt) && !self.clear_set(pt).is_empty())
            .collect()
    }

    /// Number of displayed tiles of each color, indexed by color.
    pub fn color_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.grid.num_colors()];
        for pt in 0..self.grid.len() {
            if let Cell::Color(c) = self.cell(pt) {
                counts[c] += 1;
            }
        }
        counts
    }

    /// Number of tiles still on the board.
    pub fn remaining(&self) -> usize {
        (0..self.grid.len()).filter(|&pt| !self.is_blank(pt)).count()
    }

    /// Hide the tiles at `points`.
    pub(crate) fn clear(&mut self, points: &[Point]) {
        for &pt in points {
            debug_assert!(!self.is_blank(pt), "clearing blank cell {pt}");
            self.cleared[pt] = true;
        }
    }

    /// Show the tiles at `points` again.
    pub(crate) fn restore(&mut self, points: &[Point]) {
        for &pt in points {
            debug_assert!(self.cleared[pt], "restoring uncleared cell {pt}");
            self.cleared[pt] = false;
        }
    }
}
