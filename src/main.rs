use clap::Parser;
use dotenv::dotenv;

mod config;
mod document;
mod error;
mod handler;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _ = handler::Cli::parse();
    let config = config::read_config()?;
    log::debug!("{:?}", config);
    handler::handler(config)?;
    Ok(())
}
