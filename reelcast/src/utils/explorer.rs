//! Explorer link helpers for devnet transactions and addresses.

pub fn tx_url(signature: &str) -> String {
    format!("https://explorer.solana.com/tx/{signature}?cluster=devnet")
}

pub fn address_url(address: &str) -> String {
    format!("https://explorer.solana.com/address/{address}?cluster=devnet")
}

pub fn print_explorer_links(signature: &str, wallet_address: &str) {
    println!("🔗 [ VERIFY TRANSACTION → ] {}", tx_url(signature));
    println!("🔗 [ VIEW WALLET → ] {}", address_url(wallet_address));
}
