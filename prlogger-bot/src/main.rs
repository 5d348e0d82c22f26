//! prlogger binary: run the bot, or query the configured PR store from the shell.

use anyhow::Result;
use clap::Parser;
use prlogger_bot::{cli, init_tracing, load_config, log_file_from_env, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    init_tracing(&log_file_from_env())?;

    match args.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::View { user_id } => {
            println!("{}", cli::view(user_id).await?);
            Ok(())
        }
        Commands::Leaderboard { exercise } => {
            println!("{}", cli::leaderboard(&exercise).await?);
            Ok(())
        }
    }
}
