use clap::Parser;
use reviewlyzer::structs::cli::Cli;
use reviewlyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        log::error!("❌ {}", e.user_message());
        anyhow::bail!(e);
    }

    Ok(())
}
