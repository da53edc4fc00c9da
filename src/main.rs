use anyhow::Result;
use clap::Parser;
use fluidcoins::{
    Fluidcoins,
    commands::{Cli, run, with_hint},
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = cli.config()?;
    let client = Fluidcoins::with_config(&config)?;
    let body = run(&client, cli.command).await.map_err(with_hint)?;

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
