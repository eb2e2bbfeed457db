use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use depgraph::cli::render_to_file;

#[derive(Parser, Debug)]
#[command(
    name = "depgraph",
    about = "Render a Java type relationship database as a Graphviz DOT graph",
    version
)]
struct Cli {
    /// The sqlite3 relationship database file to read
    db: PathBuf,

    /// The DOT output file to write
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Logging goes to stderr and is off unless RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    render_to_file(&args.db, &args.output)?;
    Ok(())
}
