//! Terminal presentation: the gradient banner, styling and progress
//! capabilities, and the usage hint.

pub mod banner;
pub mod hint;
pub mod progress;
pub mod style;
pub mod term;

pub use banner::Banner;
pub use progress::{FinishBehavior, ProgressIndicator, SpinnerColor};
pub use style::{Rgb, TerminalStyler};
