mod cli;

use std::process;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use timecard::Config;

fn main() {
    init_tracing();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays pure JSON. `RUST_LOG` overrides the
/// default of `warn`.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}
