use std::error::Error;

use reelcast::utils::explorer;
use reelcast::{faucet, rpc, wallet};

/// The faucet page: fund the connected wallet with 1 devnet SOL.
pub async fn handle_faucet(rpc_url: Option<String>, private_key: Option<&str>) -> Result<(), Box<dyn Error>> {
    let wallet = wallet::get_wallet(private_key)?;
    let rpc = rpc::connect(rpc_url).await?;

    println!("🚰 Funding wallet {} with 1 devnet SOL...", wallet.address());
    let signature = faucet::fund_wallet(&rpc, &wallet.keypair).await?;

    println!("✅ Funded!");
    println!("📊 Transaction Signature: {signature}");
    explorer::print_explorer_links(&signature.to_string(), &wallet.address().to_string());
    Ok(())
}
