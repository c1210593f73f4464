use std::error::Error;

use reelcast::{rpc, wallet};

/// The wallets page: connect, show the caller address and its SOL balance.
pub async fn handle_balance(rpc_url: Option<String>, private_key: Option<&str>) -> Result<(), Box<dyn Error>> {
    let wallet = wallet::get_wallet(private_key)?;
    let rpc = rpc::connect(rpc_url).await?;

    let balance = wallet.balance_sol(&rpc).await?;
    println!("🔑 Address: {}", wallet.address());
    println!("💰 Balance: {balance} SOL");
    Ok(())
}
