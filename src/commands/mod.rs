pub mod preview;
pub mod sync;

use std::time::Duration;

use indicatif::ProgressBar;

/// Spinner shown while the feed fetch is in flight.
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
