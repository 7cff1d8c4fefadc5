use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "reviewlyzer")]
#[clap(about = "Heuristic code-quality reports for uploaded projects", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
