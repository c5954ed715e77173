//! Fatal error reporting for the binary

use crate::cli::router::exit_code_for;
use crate::error::{describe_error_code, KeycipherError};
use tracing::error;

/// Render an error for stderr.
///
/// Application errors show their user message followed by the registry code;
/// `verbose >= 1` adds the source chain.
pub fn render_error(error: &anyhow::Error, verbose: u8) -> String {
    let mut lines = match error.downcast_ref::<KeycipherError>() {
        Some(err) => vec![
            format!("Error: {}", err.user_message()),
            format!(
                "  [E{:04}] {}",
                err.code(),
                describe_error_code(err.code())
            ),
        ],
        None => vec![format!("Error: {error}")],
    };

    if verbose >= 1 {
        let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
        if !causes.is_empty() {
            lines.push("Caused by:".to_string());
            lines.extend(causes.iter().map(|cause| format!("  {cause}")));
        }
    }

    lines.join("\n")
}

/// Report a fatal error and exit with its exit code
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("{}", render_error(&error, verbose));
    std::process::exit(exit_code_for(&error))
}
