//! Sibyl CLI - answer one natural-language question from the command line.

use anyhow::Result;
use sibyl::cli::{output::Output, Cli};
use sibyl::{Config, Resolver};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Logs go to stderr so stdout carries only the answer
    let default_filter = if cli.verbose { "sibyl=debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(&cli.config)?;
    let resolver = Resolver::new(&config);

    let query = cli.query.join(" ");
    let answer = resolver.resolve(&query).await;

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };
    if cli.json {
        output.answer_json(&answer)?;
    } else {
        output.answer(&answer);
    }
    Ok(())
}
