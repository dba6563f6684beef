//! ChunkNum-rs — chunked arbitrary-precision addition from the command line.

use chunknum_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let result = app::run(&config);
    if let Err(ref err) = result {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(errors::run_exit_code(&result));
}
