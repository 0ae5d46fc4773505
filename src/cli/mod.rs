pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "vault")]
#[command(about = "Vault - administration CLI for ShopVault")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Mint a session token signed with the configured secret")]
    Token(commands::token::TokenArgs),

    #[command(about = "Insert sample products directly into the configured store")]
    Seed(commands::seed::SeedArgs),

    #[command(about = "Check that a running server is healthy")]
    Ping(commands::product::RemoteArgs),

    #[command(about = "Product operations against a running server")]
    Product {
        #[command(flatten)]
        remote: commands::product::RemoteArgs,

        #[command(subcommand)]
        cmd: commands::product::ProductCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Token(args) => commands::token::handle(args, output_format).await,
        Commands::Seed(args) => commands::seed::handle(args, output_format).await,
        Commands::Ping(remote) => commands::product::ping(remote, output_format).await,
        Commands::Product { remote, cmd } => {
            commands::product::handle(remote, cmd, output_format).await
        }
    }
}
