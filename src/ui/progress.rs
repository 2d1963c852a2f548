//! Progress reporting for command handlers.
//!
//! Commands talk to a `ProgressIndicator` rather than a spinner crate
//! directly. On an interactive terminal the indicator is an animated
//! spinner; on a redirected stream it degrades to plain lines, one per
//! message, so piped output stays clean.

use std::io::{self, IsTerminal};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner palette selectable for the success restyle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl SpinnerColor {
    /// Color token understood by progress-style templates. Gray has no
    /// named token and maps to its 256-color index.
    fn token(self) -> &'static str {
        match self {
            SpinnerColor::Black => "black",
            SpinnerColor::Red => "red",
            SpinnerColor::Green => "green",
            SpinnerColor::Yellow => "yellow",
            SpinnerColor::Blue => "blue",
            SpinnerColor::Magenta => "magenta",
            SpinnerColor::Cyan => "cyan",
            SpinnerColor::White => "white",
            SpinnerColor::Gray => "8",
        }
    }
}

/// How an indicator renders its final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishBehavior {
    /// Persist a check-marked line carrying the last message.
    Succeed,
    /// Erase the spinner line.
    Clear,
}

/// Start / update-message / stop capability for long-running work.
pub trait ProgressIndicator {
    /// Begins showing progress with an initial message.
    fn start(&mut self, message: &str);

    /// Swaps the displayed message, restyling to the success color.
    fn update_message(&mut self, message: &str);

    /// Ends the indicator per its finish behavior.
    fn stop(&mut self);
}

/// Indicator for the current stdout: an animated spinner on a terminal,
/// plain line output otherwise.
pub fn indicator(success: SpinnerColor, finish: FinishBehavior) -> Box<dyn ProgressIndicator> {
    if io::stdout().is_terminal() {
        Box::new(TickSpinner::new(success, finish))
    } else {
        Box::new(PlainLines)
    }
}

/// Animated spinner backend for interactive terminals.
pub struct TickSpinner {
    bar: Option<ProgressBar>,
    success: SpinnerColor,
    finish: FinishBehavior,
}

impl TickSpinner {
    pub fn new(success: SpinnerColor, finish: FinishBehavior) -> Self {
        Self {
            bar: None,
            success,
            finish,
        }
    }

    fn style(color: &str) -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template(&format!("{{spinner:.{}}} {{msg}}", color))
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
    }
}

impl ProgressIndicator for TickSpinner {
    fn start(&mut self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::style("cyan"));
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(pb);
    }

    fn update_message(&mut self, message: &str) {
        if let Some(pb) = &self.bar {
            pb.set_style(Self::style(self.success.token()));
            pb.set_message(message.to_string());
        }
    }

    fn stop(&mut self) {
        if let Some(pb) = self.bar.take() {
            match self.finish {
                FinishBehavior::Succeed => {
                    let message = pb.message();
                    pb.set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
                    pb.finish_with_message(format!("{} {}", "✔".green(), message));
                }
                FinishBehavior::Clear => pb.finish_and_clear(),
            }
        }
    }
}

/// Plain line backend for redirected output. `start` and
/// `update_message` each write the message as its own line; `stop`
/// writes nothing.
pub struct PlainLines;

impl ProgressIndicator for PlainLines {
    fn start(&mut self, message: &str) {
        println!("{}", message);
    }

    fn update_message(&mut self, message: &str) {
        println!("{}", message);
    }

    fn stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_templates_parse_for_every_color() {
        // Self::style unwraps the template, so a bad token panics here
        for color in [
            SpinnerColor::Black,
            SpinnerColor::Red,
            SpinnerColor::Green,
            SpinnerColor::Yellow,
            SpinnerColor::Blue,
            SpinnerColor::Magenta,
            SpinnerColor::Cyan,
            SpinnerColor::White,
            SpinnerColor::Gray,
        ] {
            let _ = TickSpinner::style(color.token());
        }
    }

    #[test]
    fn test_spinner_lifecycle_without_start_is_a_no_op() {
        let mut spinner = TickSpinner::new(SpinnerColor::Green, FinishBehavior::Succeed);
        // update and stop before start must not panic
        spinner.update_message("never shown");
        spinner.stop();
        assert!(spinner.bar.is_none());
    }

    #[test]
    fn test_spinner_stop_releases_the_bar() {
        let mut spinner = TickSpinner::new(SpinnerColor::Green, FinishBehavior::Clear);
        spinner.start("working...");
        spinner.update_message("done");
        spinner.stop();
        assert!(spinner.bar.is_none());
    }

    #[test]
    fn test_plain_backend_runs_as_a_boxed_indicator() {
        // command stubs hold the indicator as Box<dyn ProgressIndicator>
        let mut progress: Box<dyn ProgressIndicator> = Box::new(PlainLines);
        progress.start("working...");
        progress.update_message("done");
        progress.stop();
    }
}
