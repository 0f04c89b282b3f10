//! The puzzle engine.
//!
//! A [`Game`] owns the board, the move history and the random source used to
//! lay out new grids. Every public operation is a single atomic transition:
//! arguments are checked first and state changes only once they pass.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::GameError;
use crate::grid::{Cell, Grid, Point};
use crate::history::History;

/// Outcome of [`Game::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearResult {
    /// Nothing matched; the game is unchanged.
    NoMove,
    /// These tiles were cleared and recorded as one move.
    Cleared(Vec<Point>),
}

/// A game in progress: board, move history and the generator's RNG.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: History,
    rng: fastrand::Rng,
}

impl Game {
    /// Start a game on a freshly generated grid.
    pub fn new(height: usize, width: usize, num_colors: usize) -> Result<Self, GameError> {
        Self::with_rng(height, width, num_colors, fastrand::Rng::new())
    }

    /// Start a game whose layouts are drawn from `rng`.
    pub fn with_rng(
        height: usize,
        width: usize,
        num_colors: usize,
        mut rng: fastrand::Rng,
    ) -> Result<Self, GameError> {
        let grid = Grid::generate(height, width, num_colors, &mut rng)?;
        info!(height, width, num_colors, "new game");
        Ok(Self {
            board: Board::new(grid),
            history: History::new(),
            rng,
        })
    }

    /// Start a game on a fixed layout.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            board: Board::new(grid),
            history: History::new(),
            rng: fastrand::Rng::new(),
        }
    }

    /// Replace the grid with a new random one and forget all moves.
    pub fn new_game(
        &mut self,
        height: usize,
        width: usize,
        num_colors: usize,
    ) -> Result<(), GameError> {
        let grid = Grid::generate(height, width, num_colors, &mut self.rng)?;
        info!(height, width, num_colors, "new game");
        self.load(grid);
        Ok(())
    }

    /// Replace the grid with `grid` and forget all moves.
    pub fn load(&mut self, grid: Grid) {
        self.board = Board::new(grid);
        self.history.clear();
    }

    /// Click on `pt`: clear the matching tiles if it is a legal move.
    pub fn select(&mut self, pt: Point) -> Result<ClearResult, GameError> {
        self.board.grid().check_point(pt)?;
        let cleared = self.board.clear_set(pt);
        if cleared.is_empty() {
            return Ok(ClearResult::NoMove);
        }
        debug!(pt, ?cleared, "commit");
        self.board.clear(&cleared);
        self.history.push(cleared.clone());
        Ok(ClearResult::Cleared(cleared))
    }

    /// Tiles collected from `pt`, whether or not they would match.
    pub fn preview(&self, pt: Point) -> Result<Vec<Point>, GameError> {
        self.board.grid().check_point(pt)?;
        Ok(self.board.collect(pt))
    }

    /// Tiles a click on `pt` would clear, without clearing them.
    pub fn clear_set(&self, pt: Point) -> Result<Vec<Point>, GameError> {
        self.board.grid().check_point(pt)?;
        Ok(self.board.clear_set(pt))
    }

    /// Revert the latest applied move. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(entry) => {
                debug!(?entry, "undo");
                self.board.restore(entry);
                true
            }
            None => false,
        }
    }

    /// Reapply the next undone move. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(entry) => {
                debug!(?entry, "redo");
                self.board.clear(entry);
                true
            }
            None => false,
        }
    }

    /// Undo moves until every color has an even number of tiles left.
    ///
    /// An even count per color is necessary for the board to be cleared, but
    /// not sufficient. Stops early when the history runs out. Returns the
    /// number of moves undone.
    pub fn undo_until_all_even(&mut self) -> usize {
        let mut counts = self.board.color_counts();
        let mut undone = 0;
        while counts.iter().any(|n| n % 2 == 1) {
            let Some(entry) = self.history.undo() else {
                break;
            };
            for &pt in entry {
                if let Cell::Color(c) = self.board.grid().cell(pt) {
                    counts[c] += 1;
                }
            }
            self.board.restore(entry);
            undone += 1;
        }
        debug!(undone, cursor = ?self.history.cursor(), "rewind");
        undone
    }

    /// Whether any click would clear tiles.
    pub fn has_legal_move(&self) -> bool {
        self.board.has_legal_move()
    }

    /// Every cell a click on which would clear tiles.
    pub fn hints(&self) -> Vec<Point> {
        self.board.legal_moves()
    }

    /// Tiles left of each color, indexed by color.
    pub fn color_counts(&self) -> Vec<usize> {
        self.board.color_counts()
    }

    /// Whether every tile has been cleared.
    pub fn is_cleared(&self) -> bool {
        self.board.remaining() == 0
    }

    /// Displayed state of every cell, for rendering.
    pub fn cells(&self) -> Vec<Cell> {
        self.board.cells()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

/// Detects the moment a game runs out of legal moves.
///
/// Querying [`Game::has_legal_move`] never notifies anyone. Front ends call
/// [`TerminalWatch::observe`] after each change and announce the end only when
/// it returns `true`, which happens once per transition.
#[derive(Debug, Clone, Copy)]
pub struct TerminalWatch {
    had_move: bool,
}

impl TerminalWatch {
    pub fn new(game: &Game) -> Self {
        Self {
            had_move: game.has_legal_move(),
        }
    }

    /// Record the current state; `true` iff moves just ran out.
    pub fn observe(&mut self, game: &Game) -> bool {
        let has_move = game.has_legal_move();
        let ended = self.had_move && !has_move;
        self.had_move = has_move;
        ended
    }
}
