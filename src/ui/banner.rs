//! Gradient ASCII banner rendering.
//!
//! A banner maps its art to a top-to-bottom color gradient: each line is
//! painted with the color found by linearly interpolating between a start
//! and an end RGB triple across the line index. Rendering takes the
//! terminal width and the styler as parameters, so the exact output lines
//! are testable byte for byte.

use crate::ui::style::{self, Rgb, TerminalStyler};
use crate::ui::term;

const TAGLINE: &str = "Wangkanai AgileKit - Agile Agent Development Toolkit";

const BLOCK_ART: &str = "
   ███                ██  ██             ██      ██  ██    ██
  ██ ██                   ██             ██     ██         ██
 ██   ██    ███████   ██  ██   ███████   ██    ██    ██ ████████
█████████  ██     ██  ██  ██  ██     ██  ███████     ██    ██
██     ██  ██     ██  ██  ██  █████████  ██    ██    ██    ██
██     ██  ██    ███  ██  ██  ██         ██     ██   ██    ██
██     ██   █████ ██  ██  ██   ███████   ██      ██  ██     ████
                  ██
            ███████
";

const SHADOW_ART: &str = "
    █████████             ███  ████           █████   ████  ███   █████
    ███░░░░░███           ░░░  ░░███          ░░███   ███░  ░░░   ░░███
   ░███    ░███   ███████ ████  ░███   ██████  ░███  ███    ████  ███████
   ░███████████  ███░░███░░███  ░███  ███░░███ ░███████    ░░███ ░░░███░
   ░███░░░░░███ ░███ ░███ ░███  ░███ ░███████  ░███░░███    ░███   ░███
   ░███    ░███ ░███ ░███ ░███  ░███ ░███░░░   ░███ ░░███   ░███   ░███ ███
   █████   █████░░███████ █████ █████░░██████  █████ ░░████ █████  ░░█████
  ░░░░░   ░░░░░  ░░░░░███░░░░░ ░░░░░  ░░░░░░  ░░░░░   ░░░░ ░░░░░    ░░░░░
                 ███ ░███
                ░░██████
                 ░░░░░░
";

/// A block of ASCII art with its gradient endpoints and layout options.
#[derive(Debug, Clone)]
pub struct Banner {
    art: &'static str,
    start: Rgb,
    end: Rgb,
    center: bool,
    tagline: Option<&'static str>,
}

impl Banner {
    fn new(art: &'static str, start: Rgb, end: Rgb) -> Self {
        Self {
            art,
            start,
            end,
            center: false,
            tagline: None,
        }
    }

    /// Solid-block art, centered, with the product tagline beneath.
    pub fn block() -> Self {
        let mut banner = Self::new(BLOCK_ART, Rgb::new(155, 186, 233), Rgb::new(224, 233, 201));
        banner.center = true;
        banner.tagline = Some(TAGLINE);
        banner
    }

    /// Shadow-block art, left-aligned, no tagline.
    pub fn shadow() -> Self {
        Self::new(SHADOW_ART, Rgb::new(155, 186, 233), Rgb::new(255, 182, 193))
    }

    /// Replaces the preset gradient endpoints for this render.
    pub fn colors(mut self, start: Rgb, end: Rgb) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// The raw art text, unstyled.
    pub fn art(&self) -> &'static str {
        self.art
    }

    /// Renders the banner into output lines for a terminal of `width`
    /// columns.
    ///
    /// Blank art lines are dropped before anything else: they are never
    /// emitted and never occupy a gradient index. Line `i` of the `n`
    /// remaining lines is painted with the color at fraction
    /// `i / (n - 1)` (0 when the art has a single line). Centered banners
    /// share one left padding computed from the widest line; the tagline
    /// centers independently on its own length. Art of only blank lines
    /// renders nothing at all.
    pub fn render(&self, width: usize, styler: &dyn TerminalStyler) -> Vec<String> {
        let lines: Vec<&str> = self.art.lines().filter(|line| !line.is_empty()).collect();
        if lines.is_empty() {
            return Vec::new();
        }

        let total = lines.len();
        let padding = if self.center {
            let widest = lines
                .iter()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0);
            term::center_padding(width, widest)
        } else {
            0
        };
        let pad = " ".repeat(padding);

        let mut out = Vec::with_capacity(total + 2);
        for (i, line) in lines.iter().enumerate() {
            let t = if total > 1 {
                i as f64 / (total - 1) as f64
            } else {
                0.0
            };
            let color = self.start.lerp(self.end, t);
            out.push(format!("{}{}", pad, styler.paint(line, color)));
        }

        if let Some(tagline) = self.tagline {
            out.push(String::new());
            let pad = " ".repeat(term::center_padding(width, tagline.chars().count()));
            out.push(format!("{}{}", pad, styler.accent(tagline)));
        }

        out
    }

    /// Writes the rendered banner to stdout, snapshotting the terminal
    /// width once and styling per the stream's color support.
    pub fn print(&self) {
        let width = term::width();
        let styler = style::auto();
        for line in self.render(width, styler) {
            println!("{}", line);
        }
    }
}
