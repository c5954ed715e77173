use clap::Parser;
use keycipher::cli::{execute_command, handle_fatal_error, resolve_log_level, Cli};
use keycipher::config::ConfigLoader;
use tracing::{debug, trace};

fn main() {
    let cli = Cli::parse();

    let config = ConfigLoader::new().load(cli.config.as_deref());
    let configured_level = config
        .as_ref()
        .ok()
        .and_then(|c| c.get_log_level().map(str::to_string));
    let log_level = resolve_log_level(cli.verbose, configured_level.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(log_level.as_str())
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("keycipher started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = config
        .map_err(anyhow::Error::from)
        .and_then(|config| execute_command(cli.command, &config));

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => handle_fatal_error(e, cli.verbose),
    }
}
