//! Client-side building blocks for the reelcast movie review program on
//! Solana devnet: a schema-driven payload codec, review-address derivation,
//! transaction submission, indexer history lookup and a devnet faucet flow.
//!
//! Everything hard (key management, signing, RPC transport) is delegated to
//! `solana-sdk` / `solana-client`; this crate only assembles requests and
//! interprets responses.

pub mod address;
pub mod error;
pub mod faucet;
pub mod history;
pub mod layout;
pub mod review;
pub mod rpc;
pub mod submit;
pub mod utils;
pub mod wallet;

pub use error::ClientError;
pub use review::MovieReview;
