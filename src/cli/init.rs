use crate::ui::progress::{self, FinishBehavior, SpinnerColor};
use crate::Result;

/// Run init command
pub fn run() -> Result<()> {
    let mut progress = progress::indicator(SpinnerColor::Green, FinishBehavior::Succeed);
    progress.start("Initializing a new AgileKit project...");
    // Add initialization logic here
    progress.update_message("Project initialized successfully!");
    progress.stop();
    Ok(())
}
