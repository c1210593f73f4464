//! Devnet faucet flow: airdrop onto an ephemeral funder, then move 1 SOL from
//! the funder to the connected wallet in a single transfer.

use log::{debug, info};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use tokio::time::{sleep, Duration};

use crate::error::ClientError;

const AIRDROP_POLL_ATTEMPTS: usize = 30;
const AIRDROP_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Fund `payer`'s wallet with 1 devnet SOL. The wallet itself signs as fee
/// payer; the airdropped funder signs as the transfer source.
pub async fn fund_wallet(rpc: &RpcClient, payer: &Keypair) -> Result<Signature, ClientError> {
    let funder = Keypair::new();

    let balance = rpc.get_balance(&funder.pubkey()).await?;
    if balance < LAMPORTS_PER_SOL {
        let airdrop = rpc.request_airdrop(&funder.pubkey(), LAMPORTS_PER_SOL).await?;
        info!("requested devnet airdrop for funder {}: {airdrop}", funder.pubkey());
        wait_for_confirmation(rpc, &airdrop).await?;
    }

    let instruction = system_instruction::transfer(&funder.pubkey(), &payer.pubkey(), LAMPORTS_PER_SOL);
    let blockhash = rpc.get_latest_blockhash().await?;
    let transaction =
        Transaction::new_signed_with_payer(&[instruction], Some(&payer.pubkey()), &[payer, &funder], blockhash);
    let signature = rpc.send_and_confirm_transaction(&transaction).await?;
    info!("faucet transfer confirmed: {signature}");
    Ok(signature)
}

async fn wait_for_confirmation(rpc: &RpcClient, signature: &Signature) -> Result<(), ClientError> {
    for attempt in 1..=AIRDROP_POLL_ATTEMPTS {
        if rpc.confirm_transaction(signature).await? {
            return Ok(());
        }
        debug!("airdrop not confirmed yet (attempt {attempt} of {AIRDROP_POLL_ATTEMPTS})");
        sleep(AIRDROP_POLL_INTERVAL).await;
    }
    Err(ClientError::AirdropUnconfirmed(*signature))
}
