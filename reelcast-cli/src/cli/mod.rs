pub mod commands;

use std::error::Error;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Movie review client for Solana devnet", long_about = None)]
struct Cli {
    /// Optional: RPC URL of the Solana node (defaults to devnet)
    #[arg(long, global = true)]
    rpc_url: Option<String>,
    /// Use a provided base58 private key instead of the wallet file
    #[arg(long, global = true)]
    key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the wallet address and its balance
    Balance,
    /// Fund the wallet with 1 devnet SOL
    Faucet,
    /// Submit a movie review (a random numeric suffix is appended to the title)
    Review {
        /// Movie title (23 bytes max, to leave room for the suffix)
        title: String,
        /// Rating from 0 to 5
        #[arg(long)]
        rating: u8,
        /// Brief description of the movie
        #[arg(long)]
        description: String,
    },
    /// Fetch transaction history for the wallet from the indexing endpoint
    History {
        /// Show the detail view for one signature from the fetched list
        #[arg(long)]
        signature: Option<String>,
        /// Indexer API key (falls back to the REELCAST_API_KEY env var)
        #[arg(long)]
        api_key: Option<String>,
        /// Optional: indexer base URL
        #[arg(long)]
        indexer_url: Option<String>,
    },
}

#[tokio::main]
pub async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Balance => {
            commands::balance::handle_balance(cli.rpc_url, cli.key.as_deref()).await?;
        }
        Commands::Faucet => {
            commands::faucet::handle_faucet(cli.rpc_url, cli.key.as_deref()).await?;
        }
        Commands::Review { title, rating, description } => {
            commands::review::handle_review(cli.rpc_url, cli.key.as_deref(), &title, rating, &description).await?;
        }
        Commands::History { signature, api_key, indexer_url } => {
            commands::history::handle_history(cli.key.as_deref(), signature.as_deref(), api_key, indexer_url).await?;
        }
    }

    Ok(())
}
