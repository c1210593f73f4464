use std::error::Error;

use reelcast::history::{find_by_signature, HistoryClient};
use reelcast::utils::shorten;
use reelcast::wallet;

/// The transaction viewer page: fetch the wallet's history from the indexing
/// endpoint, list it, and optionally expand one entry by signature.
pub async fn handle_history(
    private_key: Option<&str>,
    signature: Option<&str>,
    api_key: Option<String>,
    indexer_url: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let wallet = wallet::get_wallet(private_key)?;

    let api_key = match api_key.or_else(|| std::env::var("REELCAST_API_KEY").ok()) {
        Some(key) => key,
        None => return Err("indexer API key required (pass --api-key or set REELCAST_API_KEY)".into()),
    };
    let client = match indexer_url {
        Some(url) => HistoryClient::with_base_url(url, api_key),
        None => HistoryClient::new(api_key),
    };

    let entries = client.fetch_history(&wallet.address()).await?;
    if entries.is_empty() {
        println!("No transactions found for {}", wallet.address());
        return Ok(());
    }

    println!("👀 {} transactions for {}:", entries.len(), wallet.address());
    for entry in &entries {
        println!("  Transaction: {}", shorten(&entry.signature, 14));
    }

    if let Some(signature) = signature {
        match find_by_signature(&entries, signature) {
            Some(entry) => {
                println!();
                println!("📄 Details for {}:", shorten(signature, 14));
                for (key, value) in entry.detail_rows() {
                    println!("  {key}: {value}");
                }
            }
            None => println!("Signature {signature} is not in the fetched list"),
        }
    }

    Ok(())
}
