//! RPC endpoint plumbing: connect to a node, verify it is healthy, and log
//! what we connected to before any flow runs against it.

use log::{info, warn};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::error::ClientError;

pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Build a client for `rpc_url` (devnet by default) at confirmed commitment
/// and refuse nodes that report unhealthy.
pub async fn connect(rpc_url: Option<String>) -> Result<RpcClient, ClientError> {
    let url = rpc_url.unwrap_or_else(|| DEVNET_RPC_URL.to_string());
    let client = RpcClient::new_with_commitment(url.clone(), CommitmentConfig::confirmed());

    let version = client.get_version().await.map_err(|e| {
        warn!("RPC connection to {url} failed: {e}");
        e
    })?;
    if let Err(e) = client.get_health().await {
        warn!("Node at {url} reports unhealthy: {e}");
        return Err(e.into());
    }
    info!("Connected to {url}, node version: {}", version.solana_core);
    Ok(client)
}
