use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample config file to ~/reviewlyzer/config.toml
    Init,
    /// Start the upload API
    Serve {
        /// Overrides the configured port and the PORT variable
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Analyze a local zip archive and print the report as JSON
    Analyze {
        archive: PathBuf,
        #[clap(short, long)]
        description: Option<String>,
    },
    /// Check the configuration file
    Validate,
}
