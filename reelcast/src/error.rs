use thiserror::Error;

use crate::layout::LayoutError;

/// Input problems caught before any payload is encoded or any network call is
/// made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("movie title cannot be empty")]
    EmptyTitle,
    #[error("movie description cannot be empty")]
    EmptyDescription,
    #[error("rating {0} is out of range (0-5)")]
    RatingOutOfRange(u8),
    #[error("title is {0} bytes, past the 32-byte derivation seed limit")]
    TitleTooLong(usize),
    #[error("encoded review would be {0} bytes, past the 1000-byte payload bound")]
    PayloadTooLarge(usize),
    #[error("payload carries unknown instruction tag {0}")]
    UnknownVariant(u8),
}

/// Crate-level error rollup. Validation and layout errors abort a flow before
/// it reaches the network; RPC and indexer errors are surfaced from the
/// respective collaborator and never retried.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("rpc request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
    #[error("indexer request failed: {0}")]
    Indexer(#[from] reqwest::Error),
    #[error("indexer returned HTTP {0}")]
    IndexerStatus(reqwest::StatusCode),
    #[error("airdrop {0} was not confirmed in time")]
    AirdropUnconfirmed(solana_sdk::signature::Signature),
    #[error("wallet error: {0}")]
    Wallet(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
