//! Line-oriented text protocol for driving a game.
//!
//! The format follows GTP: each request is an optional numeric id followed by
//! a command and its arguments; each response is `=<id> <message>` on success
//! or `?<id> <message>` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Identify the engine
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `new_game [<height> <width> <colors>]` - Generate a new grid
//! - `setup <colors> <layout>` - Load a fixed grid, rows separated by `/`
//! - `select <index>` or `select <row> <col>` - Click a cell
//! - `preview <index>` or `preview <row> <col>` - Tiles seen from a cell
//! - `undo`, `redo` - Move through the history
//! - `rewind` - Undo until every color count is even
//! - `legal` - Whether any move remains
//! - `hint` - Cells where a click clears tiles
//! - `counts` - Remaining tiles per color
//! - `history` - Cursor (or -1) and number of recorded moves
//! - `showboard` - Draw the board
//!
//! The end of the game is announced once, on the response to the command
//! that used up the last legal move.

use std::io::{self, BufRead, Write};

use crate::constants::{BLANK_GLYPH, GLYPHS, PROTOCOL_VERSION, UNKNOWN_GLYPH};
use crate::game::{ClearResult, Game, TerminalWatch};
use crate::grid::{Cell, Grid, Point};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "counts",
    "hint",
    "history",
    "known_command",
    "legal",
    "list_commands",
    "name",
    "new_game",
    "preview",
    "protocol_version",
    "quit",
    "redo",
    "rewind",
    "select",
    "setup",
    "showboard",
    "undo",
    "version",
];

/// A game being played over the protocol, with its end-of-game watch.
pub struct Session {
    /// Current game
    game: Game,
    /// Tracks when the last legal move is used up
    watch: TerminalWatch,
}

impl Session {
    pub fn new(game: Game) -> Self {
        let watch = TerminalWatch::new(&game);
        Self { game, watch }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, PROTOCOL_VERSION.to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "new_game" => {
                let grid = self.game.grid();
                let dims = match args {
                    [] => Ok((grid.height(), grid.width(), grid.num_colors())),
                    [h, w, c] => match (h.parse(), w.parse(), c.parse()) {
                        (Ok(h), Ok(w), Ok(c)) => Ok((h, w, c)),
                        _ => Err("invalid size".to_string()),
                    },
                    _ => Err("expected <height> <width> <colors>".to_string()),
                };
                match dims.and_then(|(h, w, c)| {
                    self.game.new_game(h, w, c).map_err(|e| e.to_string())
                }) {
                    Ok(()) => {
                        self.watch = TerminalWatch::new(&self.game);
                        (true, String::new())
                    }
                    Err(e) => (false, e),
                }
            }

            "setup" => {
                let Some((colors, layout)) = args.split_first() else {
                    return (false, "missing arguments".to_string());
                };
                let Ok(num_colors) = colors.parse::<usize>() else {
                    return (false, "invalid color count".to_string());
                };
                match Grid::parse(&layout.join(" "), num_colors) {
                    Ok(grid) => {
                        self.game.load(grid);
                        self.watch = TerminalWatch::new(&self.game);
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "select" => {
                let pt = match self.parse_point(args) {
                    Ok(pt) => pt,
                    Err(e) => return (false, e),
                };
                match self.game.select(pt) {
                    Ok(ClearResult::Cleared(points)) => (true, self.announce(join(&points))),
                    Ok(ClearResult::NoMove) => (true, "no match".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "preview" => {
                let collected = self
                    .parse_point(args)
                    .and_then(|pt| self.game.preview(pt).map_err(|e| e.to_string()));
                match collected {
                    Ok(points) => (true, join(&points)),
                    Err(e) => (false, e),
                }
            }

            "undo" => {
                let undone = self.game.undo();
                self.watch.observe(&self.game);
                (true, undone.to_string())
            }

            "redo" => {
                let redone = self.game.redo();
                (true, self.announce(redone.to_string()))
            }

            "rewind" => {
                let undone = self.game.undo_until_all_even();
                self.watch.observe(&self.game);
                (true, undone.to_string())
            }

            "legal" => (true, self.game.has_legal_move().to_string()),

            "hint" => (true, join(&self.game.hints())),

            "counts" => (true, join(&self.game.color_counts())),

            "history" => {
                let history = self.game.history();
                let cursor = history
                    .cursor()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-1".to_string());
                (true, format!("{cursor} {}", history.len()))
            }

            "showboard" => (true, format!("\n{}", render(&self.game))),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Parse `<index>` or `<row> <col>`.
    fn parse_point(&self, args: &[&str]) -> Result<Point, String> {
        let grid = self.game.grid();
        match args {
            [index] => index.parse().map_err(|_| format!("invalid index: {index}")),
            [row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => grid
                    .point(row, col)
                    .ok_or_else(|| format!("({row}, {col}) is off the grid")),
                _ => Err("invalid coordinates".to_string()),
            },
            _ => Err("expected <index> or <row> <col>".to_string()),
        }
    }

    /// Append an end-of-game notice to `message` if moves just ran out.
    fn announce(&mut self, message: String) -> String {
        if !self.watch.observe(&self.game) {
            return message;
        }
        let notice = if self.game.is_cleared() {
            "board cleared"
        } else {
            "no moves left"
        };
        format!("{message}\n{notice}")
    }
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Character used to draw a cell.
pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Blank => BLANK_GLYPH,
        Cell::Color(c) => GLYPHS.chars().nth(c).unwrap_or(UNKNOWN_GLYPH),
    }
}

/// Draw the displayed board, one row per line.
pub fn render(game: &Game) -> String {
    let width = game.grid().width();
    game.cells()
        .chunks(width)
        .map(|row| row.iter().map(|&c| glyph(c).to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
