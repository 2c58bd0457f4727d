use anyhow::Result;
use clap::Parser;

use ferias_cli::cli::{Cli, commands};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    commands::run(cli).await
}
