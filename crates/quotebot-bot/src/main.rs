mod cli;
mod config;
mod console;
mod error;

use std::sync::Arc;

use clap::Parser;

use quotebot_core::{AlphaVantageClient, MessageHandler, ReqwestHttpClient};

use crate::cli::{Cli, LogLevel};
use crate::config::BotConfig;
use crate::error::BotError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> Result<(), BotError> {
    let cli = Cli::parse();
    init_logger(cli.log_level)?;

    let mut config = BotConfig::load(&cli.config)?;
    if let Some(prefix) = cli.prefix {
        config.prefix = prefix;
    }

    let transport = Arc::new(ReqwestHttpClient::new());
    let provider =
        AlphaVantageClient::new(transport, config.api_key.clone()).with_timeout_ms(cli.timeout_ms);
    let handler = MessageHandler::new(config.prefix.clone(), provider);

    console::run(&handler).await?;
    Ok(())
}

fn init_logger(level: LogLevel) -> Result<(), BotError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.to_filter());
    builder.format_timestamp_micros();
    builder.format_module_path(false);
    builder
        .try_init()
        .map_err(|error| BotError::Logger(error.to_string()))
}
