//! Splitwall command-line entry point.
//!
//! Without arguments the wallpaper rotation runs forever with the built-in
//! defaults. Logging is controlled through `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = splitwall_lib::cli::run() {
        eprintln!("splitwall: {err}");
        std::process::exit(1);
    }
}
