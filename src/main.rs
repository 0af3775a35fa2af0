use std::{io, process};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use zanata_compgen::{cli, generate, zanata};

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let registry = zanata::registry();
    let config = cli::parse(&registry);
    if let Err(e) = generate(&registry, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
