//! Command-line interface for the resource hub server.

pub mod runner;

use clap::{Parser, Subcommand};

pub use runner::{run_seed, run_serve};

/// Study resource catalog server
#[derive(Parser, Debug)]
#[command(name = "resource-hub")]
#[command(about = "Serve and manage the study resource catalog", long_about = None)]
pub struct HubCli {
    #[command(subcommand)]
    pub command: Option<HubCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum HubCommand {
    /// Run the HTTP server (default)
    Serve {
        /// Override BIND_ADDRESS
        #[arg(long)]
        bind: Option<String>,
    },

    /// Load the sample catalog into the configured store and exit
    Seed {
        /// Remove existing records first
        #[arg(long)]
        reset: bool,
    },
}

impl HubCli {
    /// The subcommand to run; `serve` when none was given.
    pub fn command_or_default(&self) -> HubCommand {
        self.command
            .clone()
            .unwrap_or(HubCommand::Serve { bind: None })
    }
}
