//! Errors reported by the puzzle engine.

use std::fmt;

use crate::grid::{Color, Point};

/// Failure of an engine operation.
///
/// Every error is reported before any state is touched, so a failed call
/// leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Grid dimensions or color count are zero, or the area overflows.
    InvalidConfiguration {
        height: usize,
        width: usize,
        num_colors: usize,
    },
    /// A cell index outside `[0, len)`.
    IndexOutOfBounds { point: Point, len: usize },
    /// A fixed layout whose cell count does not match `height * width`.
    LayoutMismatch { expected: usize, actual: usize },
    /// A fixed layout containing a color outside `[0, num_colors)`.
    ColorOutOfRange {
        point: Point,
        color: Color,
        num_colors: usize,
    },
    /// Layout text that could not be parsed.
    ParseLayout(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfiguration {
                height,
                width,
                num_colors,
            } => write!(
                f,
                "invalid configuration: {height}x{width} grid with {num_colors} colors"
            ),
            GameError::IndexOutOfBounds { point, len } => {
                write!(f, "index {point} out of bounds (grid has {len} cells)")
            }
            GameError::LayoutMismatch { expected, actual } => {
                write!(f, "layout has {actual} cells, expected {expected}")
            }
            GameError::ColorOutOfRange {
                point,
                color,
                num_colors,
            } => write!(
                f,
                "color {color} at index {point} is not below {num_colors}"
            ),
            GameError::ParseLayout(msg) => write!(f, "bad layout: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}
