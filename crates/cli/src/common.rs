//! Progress reporting helpers shared across the pipeline stages.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::GenError;

/// Spinner utility for CLI operations.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());
    spinner
}

/// Format elapsed time as `123ms` or `2s 45ms`.
pub fn format_elapsed_ms(start: Instant) -> String {
    let elapsed = start.elapsed();
    if elapsed.as_secs() == 0 {
        return format!("{}ms", elapsed.as_millis());
    }
    let seconds = elapsed.as_secs();
    let remaining_ms = elapsed.subsec_millis();
    format!("{seconds}s {remaining_ms}ms")
}

/// Run a step behind a spinner, printing the success message with timing.
///
/// The spinner is cleared whether the step succeeds or fails; a failing
/// step leaves error rendering to the caller.
pub fn run_with_spinner<T, F>(
    description: &str,
    success_message: &str,
    f: F,
) -> Result<T, GenError>
where
    F: FnOnce() -> Result<T, GenError>,
{
    let spinner = spinner(description);
    let start = Instant::now();
    let result = f();
    spinner.finish_and_clear();
    if result.is_ok() {
        println!("{} ({})", success_message, format_elapsed_ms(start));
    }
    result
}
