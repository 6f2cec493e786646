//! FruityLookup CLI
//!
//! Command-line interface for looking up fruits on the FruityVice API.

use anyhow::Result;
use clap::Parser;
use fruityctl::cli::{error_report, handle_lookup, Cli};
use fruityctl::config::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build configuration: defaults → CLI args
    let mut builder = CliConfig::builder()
        .with_output_format(cli.format.into())
        .with_verbose(cli.verbose);

    if let Some(ref api_url) = cli.api_url {
        builder = builder.with_api_url(api_url);
    }

    let config = builder.build();

    init_tracing(config.verbose);
    tracing::debug!(api_url = %config.api_url, format = %config.output_format, "configuration loaded");

    match handle_lookup(&config, &cli.fruit_name).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => match error_report(&e) {
            Some((code, message)) => {
                eprintln!("{}", message);
                std::process::exit(code);
            }
            None => Err(e.into()),
        },
    }
}

/// Log to stderr so stdout only carries the lookup result.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
