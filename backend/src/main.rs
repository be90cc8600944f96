//! Resource Hub - Main Entry Point

use clap::Parser;

use resource_hub_backend::{
    cli::{self, HubCli, HubCommand},
    config::Config,
    error::Result,
    telemetry,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = HubCli::parse();
    let mut config = Config::from_env()?;
    telemetry::init_tracing(&config.log_level);

    match args.command_or_default() {
        HubCommand::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            cli::run_serve(config).await
        }
        HubCommand::Seed { reset } => cli::run_seed(config, reset).await,
    }
}
