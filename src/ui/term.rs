//! Terminal geometry helpers for centered output.

use std::io::{self, IsTerminal};

use crossterm::terminal;

/// Column count assumed when no terminal is attached.
pub const FALLBACK_WIDTH: usize = 80;

/// Current terminal column count, read once per call.
///
/// Reports the width of the terminal behind standard output; when stdout
/// is redirected (a pipe or a file) the width is undetectable and the
/// fallback of 80 columns applies.
pub fn width() -> usize {
    if !io::stdout().is_terminal() {
        return FALLBACK_WIDTH;
    }
    terminal::size()
        .map(|(cols, _rows)| usize::from(cols))
        .unwrap_or(FALLBACK_WIDTH)
}

/// Spaces to prepend so a line of `len` characters sits centered in
/// `width` columns. Saturates at zero when the line is wider than the
/// terminal.
pub fn center_padding(width: usize, len: usize) -> usize {
    width.saturating_sub(len) / 2
}
