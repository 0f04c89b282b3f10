//! Color Tiles: a tile-clearing puzzle engine.
//!
//! The grid holds colored tiles and blank slots. Clicking a blank slot looks
//! for the nearest tile in each of the four directions and clears every one
//! of those tiles whose color appears at least twice among them.
//!
//! ## Modules
//!
//! - [`constants`] - Default dimensions, fill ratio and display glyphs
//! - [`grid`] - Cells and grid generation
//! - [`board`] - Cleared mask, tile collection and matching
//! - [`history`] - Undo/redo move log
//! - [`game`] - The engine: moves, undo/redo, parity rewind, end detection
//! - [`protocol`] - Text protocol front end
//! - [`error`] - Engine errors
//!
//! ## Example
//!
//! ```
//! use color_tiles::game::{ClearResult, Game};
//! use color_tiles::grid::Grid;
//!
//! let grid = Grid::parse("0 . . 0", 1).unwrap();
//! let mut game = Game::from_grid(grid);
//!
//! assert_eq!(game.select(1).unwrap(), ClearResult::Cleared(vec![0, 3]));
//! assert!(!game.has_legal_move());
//! assert!(game.undo());
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod grid;
pub mod history;
pub mod protocol;
