//! Deterministic review-address derivation. The destination account for a
//! review is derived from (reviewer, title) under the review program's
//! namespace, never generated randomly; the uniqueness suffix on the title is
//! what keeps repeated submissions from colliding.

use solana_sdk::pubkey::Pubkey;

use crate::error::ValidationError;
use crate::review::MAX_SEED_BYTES;

/// On-chain movie review program this client targets.
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("GWenWxNqXEEM4Cue4jRoYrGuyGb3FTAGu4fZGSwpMU5P");

/// Derive the program address holding the review for `title` by `reviewer`.
/// Pure: same inputs always yield the same address and bump.
pub fn derive_review_address(reviewer: &Pubkey, title: &str) -> Result<(Pubkey, u8), ValidationError> {
    if title.len() > MAX_SEED_BYTES {
        return Err(ValidationError::TitleTooLong(title.len()));
    }
    // Cannot panic once the seed bound is checked.
    Ok(Pubkey::find_program_address(&[reviewer.as_ref(), title.as_bytes()], &PROGRAM_ID))
}
