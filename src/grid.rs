//! Grid layout and generation.
//!
//! A grid is a row-major vector of cells. It is produced once per game by
//! [`Grid::generate`] and never changes afterwards; clears are tracked
//! separately by [`crate::board::Board`] so the original colors survive.

use crate::constants::FILL_RATIO;
use crate::error::GameError;

/// A cell on the grid, as a row-major index (`row * width + col`).
pub type Point = usize;

/// A tile color in `[0, num_colors)`.
pub type Color = usize;

/// Contents of a grid slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Blank,
    Color(Color),
}

impl Cell {
    /// The tile color, or `None` for a blank.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Color(c) => Some(c),
            Cell::Blank => None,
        }
    }

    #[inline]
    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }
}

/// The original layout of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    num_colors: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Generate a random grid.
    ///
    /// Each color gets exactly [`tiles_per_color`] tiles and the rest of the
    /// grid is blank. The layout is shuffled with Fisher-Yates using `rng`.
    pub fn generate(
        height: usize,
        width: usize,
        num_colors: usize,
        rng: &mut fastrand::Rng,
    ) -> Result<Grid, GameError> {
        let area = checked_area(height, width, num_colors)?;
        let amt = tiles_per_color(area, num_colors);
        let filled = amt * num_colors;

        let mut cells: Vec<Cell> = (0..area)
            .map(|i| {
                if i < filled {
                    Cell::Color(i / amt)
                } else {
                    Cell::Blank
                }
            })
            .collect();

        for i in (1..cells.len()).rev() {
            let j = rng.usize(..=i);
            cells.swap(i, j);
        }

        Ok(Grid {
            height,
            width,
            num_colors,
            cells,
        })
    }

    /// Build a grid from a fixed layout.
    pub fn from_cells(
        height: usize,
        width: usize,
        num_colors: usize,
        cells: Vec<Cell>,
    ) -> Result<Grid, GameError> {
        let area = checked_area(height, width, num_colors)?;
        if cells.len() != area {
            return Err(GameError::LayoutMismatch {
                expected: area,
                actual: cells.len(),
            });
        }
        for (point, cell) in cells.iter().enumerate() {
            if let Cell::Color(color) = *cell {
                if color >= num_colors {
                    return Err(GameError::ColorOutOfRange {
                        point,
                        color,
                        num_colors,
                    });
                }
            }
        }
        Ok(Grid {
            height,
            width,
            num_colors,
            cells,
        })
    }

    /// Parse a layout such as `"0 . . 0 / 1 . 1 ."`.
    ///
    /// Rows are separated by newlines or `/`, cells by whitespace. A `.` is a
    /// blank; anything else must be a color number.
    pub fn parse(text: &str, num_colors: usize) -> Result<Grid, GameError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in text.split(['\n', '/']) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(parse_cell)
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(GameError::ParseLayout(format!(
                "row {bad} has {} cells, expected {width}",
                rows[bad].len()
            )));
        }
        let height = rows.len();
        Grid::from_cells(height, width, num_colors, rows.concat())
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    /// Number of cells (`height * width`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The original cell at `pt`. Panics if `pt` is out of bounds.
    #[inline]
    pub fn cell(&self, pt: Point) -> Cell {
        self.cells[pt]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Split a point into `(row, col)`.
    #[inline]
    pub fn row_col(&self, pt: Point) -> (usize, usize) {
        (pt / self.width, pt % self.width)
    }

    /// Join `(row, col)` into a point, or `None` if off the grid.
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> Option<Point> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Reject points outside the grid.
    pub fn check_point(&self, pt: Point) -> Result<Point, GameError> {
        if pt < self.len() {
            Ok(pt)
        } else {
            Err(GameError::IndexOutOfBounds {
                point: pt,
                len: self.len(),
            })
        }
    }
}

/// Number of tiles of each color in a generated grid of `area` cells.
///
/// This is `floor(area / num_colors * 0.6)` in floating point, so results
/// follow float rounding (35 cells and 3 colors give 6, not 7).
pub fn tiles_per_color(area: usize, num_colors: usize) -> usize {
    if num_colors == 0 {
        return 0;
    }
    (area as f64 / num_colors as f64 * FILL_RATIO).floor() as usize
}

fn checked_area(height: usize, width: usize, num_colors: usize) -> Result<usize, GameError> {
    let invalid = GameError::InvalidConfiguration {
        height,
        width,
        num_colors,
    };
    if height == 0 || width == 0 || num_colors == 0 {
        return Err(invalid);
    }
    height.checked_mul(width).ok_or(invalid)
}

fn parse_cell(token: &str) -> Result<Cell, GameError> {
    if token == "." {
        return Ok(Cell::Blank);
    }
    token
        .parse::<Color>()
        .map(Cell::Color)
        .map_err(|_| GameError::ParseLayout(format!("unexpected token {token:?}")))
}
