//! Log level selection

/// Get the log filter for a verbosity count
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace", // -vvv also enables thread ids and line numbers
    }
}

/// Pick the log filter: `-v` flags win over the configured level.
pub fn resolve_log_level(verbose: u8, configured: Option<&str>) -> String {
    match (verbose, configured) {
        (0, Some(level)) => level.to_lowercase(),
        (verbose, _) => get_log_level(verbose).to_string(),
    }
}
