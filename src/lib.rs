// AgileKit - Agile Agent Development Toolkit
// Command-line scaffolding with a gradient banner and terminal progress helpers

pub mod cli;
pub mod ui;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use ui::banner::Banner;
pub use ui::progress::ProgressIndicator;
pub use ui::style::Rgb;
