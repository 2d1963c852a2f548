use crate::ui::progress::{self, FinishBehavior, SpinnerColor};
use crate::Result;

/// Run upgrade command
pub fn run() -> Result<()> {
    let mut progress = progress::indicator(SpinnerColor::Green, FinishBehavior::Succeed);
    progress.start("Upgrading the application...");
    // Add upgrade logic here
    progress.update_message("Application upgraded successfully!");
    progress.stop();
    Ok(())
}
