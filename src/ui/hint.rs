//! Post-help usage hint for bare invocations.

use std::env;

use colored::Colorize;

use crate::ui::term;

const MESSAGE: &str = "Run 'agile --help' for usage information";

/// Prints a centered usage hint when the process was invoked with no
/// arguments (program name only). With any argument present, prints
/// nothing.
pub fn print() {
    if env::args().count() > 1 {
        return;
    }
    let padding = term::center_padding(term::width(), MESSAGE.chars().count());
    println!();
    println!(
        "{}{}{}{}",
        " ".repeat(padding),
        "Run ".bright_black(),
        "'agile --help'".truecolor(93, 150, 8).italic(),
        " for usage information".bright_black()
    );
}
