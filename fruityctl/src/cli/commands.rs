//! CLI argument definitions

use clap::Parser;

/// Look up fruit information from the FruityVice API
#[derive(Parser, Debug)]
#[command(name = "fruityctl")]
#[command(version, about = "Look up fruit information from the FruityVice API", long_about = None)]
pub struct Cli {
    /// Name of the fruit to look up
    pub fruit_name: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Custom API URL (defaults to https://www.fruityvice.com/api/fruit)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON output
    Machine,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => crate::format::OutputFormat::Human,
            OutputFormat::Machine => crate::format::OutputFormat::Machine,
        }
    }
}
