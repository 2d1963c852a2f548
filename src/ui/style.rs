//! Color primitives and the styling capability behind the banner.
//!
//! The renderer talks to a `TerminalStyler` instead of a styling crate so
//! unstyled backends (redirected output, `NO_COLOR`) substitute without
//! touching the gradient logic.

use std::env;
use std::io::{self, IsTerminal};

/// An RGB triple. Channels are confined to [0, 255] by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other` at fraction `t`.
    ///
    /// Channels round to the nearest integer. `t` is clamped to [0, 1]
    /// and non-finite fractions fall back to 0, so the result always
    /// lies between the two endpoints.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Minimal styling capability: wrap text with a style, or leave it
/// untouched when styling is unsupported.
pub trait TerminalStyler {
    /// Wraps `text` in a 24-bit foreground color directive. Empty text
    /// comes back unchanged.
    fn paint(&self, text: &str, color: Rgb) -> String;

    /// Wraps `text` in the accent style used for taglines.
    fn accent(&self, text: &str) -> String;
}

/// Emits truecolor ANSI escape sequences.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiStyler;

impl TerminalStyler for AnsiStyler {
    fn paint(&self, text: &str, color: Rgb) -> String {
        if text.is_empty() {
            return String::new();
        }
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", color.r, color.g, color.b, text)
    }

    fn accent(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        // Italic, bright yellow.
        format!("\x1b[3;93m{text}\x1b[0m")
    }
}

/// Leaves text untouched, for redirected or color-suppressed output.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl TerminalStyler for PlainStyler {
    fn paint(&self, text: &str, _color: Rgb) -> String {
        text.to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Styler for direct terminal output: ANSI on an interactive stdout
/// unless `NO_COLOR` is set, plain otherwise.
pub fn auto() -> &'static dyn TerminalStyler {
    if io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none() {
        &AnsiStyler
    } else {
        &PlainStyler
    }
}
