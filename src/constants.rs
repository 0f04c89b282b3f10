//! Constants for default grid dimensions, generation, and display.
//!
//! The engine itself only needs the fill ratio. Everything else here is used
//! by the command-line front end and the text protocol.

// =============================================================================
// Grid Defaults
// =============================================================================

/// Default number of rows for a new game.
pub const DEFAULT_HEIGHT: usize = 15;

/// Default number of columns for a new game.
pub const DEFAULT_WIDTH: usize = 23;

/// Default number of distinct tile colors.
pub const DEFAULT_NUM_COLORS: usize = 10;

// =============================================================================
// Generation
// =============================================================================

/// Share of the grid filled with tiles.
pub const FILL_RATIO: f64 = 0.6;

// =============================================================================
// Display
// =============================================================================

/// Glyphs used to draw tiles, indexed by color.
pub const GLYPHS: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわゐゑを";

/// Glyph for colors beyond the end of [`GLYPHS`].
pub const UNKNOWN_GLYPH: char = '?';

/// Glyph for blank cells.
pub const BLANK_GLYPH: char = '.';

// =============================================================================
// Protocol
// =============================================================================

/// Version of the text protocol spoken by [`crate::protocol`].
pub const PROTOCOL_VERSION: u32 = 1;
