use crate::ui::progress::{self, FinishBehavior, SpinnerColor};
use crate::Result;

/// Run check command
pub fn run() -> Result<()> {
    let mut progress = progress::indicator(SpinnerColor::Green, FinishBehavior::Succeed);
    progress.start("Checking the application...");
    // Add check logic here
    progress.update_message("Application check completed successfully!");
    progress.stop();
    Ok(())
}
