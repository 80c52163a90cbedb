pub mod generate;

pub use generate::GenerateArgs;

use console::style;

use crate::error::GenError;

/// Drive a command future and map its outcome to a process exit code.
///
/// Failures render as a single red line on stderr.
pub async fn run_cli_async<F, Fut>(f: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), GenError>>,
{
    match f().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", style(format!("❌ {err}")).red());
            1
        }
    }
}
