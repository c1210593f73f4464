//! File-backed wallet management. The web pages got a connected wallet
//! injected by the browser adapter; here the equivalent collaborator is a
//! keypair file that is loaded, or created on first run.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::native_token::lamports_to_sol;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, write_keypair_file, Keypair, Signer};

use crate::error::ClientError;
use crate::utils::explorer;

#[derive(Debug, Clone)]
pub struct WalletConfig {
    pub wallet_dir: PathBuf,
    pub keypair_file: PathBuf,
}

impl Default for WalletConfig {
    fn default() -> Self {
        let wallet_dir = Path::new(".reelcast").to_path_buf();
        let keypair_file = wallet_dir.join("wallet.json");
        Self { wallet_dir, keypair_file }
    }
}

#[derive(Debug)]
pub struct ReviewWallet {
    pub keypair: Keypair,
    pub config: WalletConfig,
    /// True if the keypair file was created this session.
    pub was_created: bool,
}

impl ReviewWallet {
    /// Load the existing wallet file or create a new one on first run.
    pub fn load_or_create() -> Result<Self, ClientError> {
        Self::load_or_create_with_config(WalletConfig::default())
    }

    pub fn load_or_create_with_config(config: WalletConfig) -> Result<Self, ClientError> {
        if config.keypair_file.exists() {
            Self::load_existing(config)
        } else {
            Self::create_new(config)
        }
    }

    fn create_new(config: WalletConfig) -> Result<Self, ClientError> {
        println!("🎬 Welcome to reelcast!");
        println!("📁 Setting up your wallet directory: {}", config.wallet_dir.display());

        fs::create_dir_all(&config.wallet_dir)?;

        let keypair = Keypair::new();
        write_keypair_file(&keypair, &config.keypair_file).map_err(|e| ClientError::Wallet(e.to_string()))?;

        println!("💾 Wallet saved to: {}", config.keypair_file.display());
        println!("🔑 Address: {}", keypair.pubkey());
        println!("💡 Fund it with `reelcast-cli faucet` before submitting reviews");
        println!();

        Ok(Self { keypair, config, was_created: true })
    }

    fn load_existing(config: WalletConfig) -> Result<Self, ClientError> {
        let keypair = read_keypair_file(&config.keypair_file).map_err(|e| ClientError::Wallet(e.to_string()))?;
        info!("Loaded wallet {} from {}", keypair.pubkey(), config.keypair_file.display());
        Ok(Self { keypair, config, was_created: false })
    }

    /// Build a wallet from a provided base58 private key (the `--key` escape
    /// hatch), bypassing the wallet file.
    pub fn from_base58(private_key: &str) -> Result<Self, ClientError> {
        let bytes =
            bs58::decode(private_key).into_vec().map_err(|e| ClientError::Wallet(format!("invalid base58 key: {e}")))?;
        let keypair =
            Keypair::from_bytes(&bytes).map_err(|e| ClientError::Wallet(format!("invalid keypair bytes: {e}")))?;
        Ok(Self { keypair, config: WalletConfig::default(), was_created: false })
    }

    /// The connected caller address every flow validates against.
    pub fn address(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Current balance of the wallet address, in SOL.
    pub async fn balance_sol(&self, rpc: &RpcClient) -> Result<f64, ClientError> {
        let lamports = rpc.get_balance(&self.address()).await?;
        Ok(lamports_to_sol(lamports))
    }

    pub fn show_funding_reminder(&self) {
        if self.was_created {
            println!("💡 REMINDER: this wallet is empty. Fund it before submitting:");
            println!("   Address:  {}", self.address());
            println!("   Explorer: {}", explorer::address_url(&self.address().to_string()));
            println!();
        }
    }
}

/// Resolve the wallet for a CLI invocation: a provided private key wins,
/// otherwise the wallet file is loaded or created.
pub fn get_wallet(private_key: Option<&str>) -> Result<ReviewWallet, ClientError> {
    match private_key {
        Some(key) => ReviewWallet::from_base58(key),
        None => ReviewWallet::load_or_create(),
    }
}
