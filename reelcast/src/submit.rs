//! The submission flow: validate -> encode -> derive -> sign & broadcast.
//! One flow per call, at most once; failures abort and are never retried.

use log::info;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::system_program;
use solana_sdk::transaction::Transaction;

use crate::address::{derive_review_address, PROGRAM_ID};
use crate::error::ClientError;
use crate::review::MovieReview;

/// What a successful submission leaves behind: the broadcast identifier, the
/// derived account the review lives at, and the final (suffixed) title.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub signature: Signature,
    pub review_address: Pubkey,
    pub title: String,
}

/// Assemble the review instruction. Account order is fixed by the program:
/// reviewer signs, the derived review account is written, the system program
/// is referenced read-only.
pub fn build_review_instruction(
    reviewer: &Pubkey,
    review: &MovieReview,
) -> Result<(Instruction, Pubkey), ClientError> {
    review.validate()?;
    let data = review.encode()?;
    let (review_address, _bump) = derive_review_address(reviewer, &review.title)?;

    let accounts = vec![
        AccountMeta::new_readonly(*reviewer, true),
        AccountMeta::new(review_address, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    Ok((Instruction { program_id: PROGRAM_ID, accounts, data }, review_address))
}

/// Run the whole flow against the network and return the transaction
/// signature the broadcaster handed back.
pub async fn submit_review(
    rpc: &RpcClient,
    payer: &Keypair,
    review: &MovieReview,
) -> Result<SubmitOutcome, ClientError> {
    let (instruction, review_address) = build_review_instruction(&payer.pubkey(), review)?;
    info!("review \"{}\" will live at {review_address}", review.title);

    let blockhash = rpc.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(&[instruction], Some(&payer.pubkey()), &[payer], blockhash);
    let signature = rpc.send_and_confirm_transaction(&transaction).await?;
    info!("review transaction accepted: {signature}");

    Ok(SubmitOutcome { signature, review_address, title: review.title.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn instruction_references_three_accounts_in_fixed_order() {
        let reviewer = Pubkey::new_unique();
        let review = MovieReview::new("Dune - (1234)", 5, "Epic");
        let (instruction, review_address) = build_review_instruction(&reviewer, &review).unwrap();

        assert_eq!(instruction.program_id, PROGRAM_ID);
        assert_eq!(instruction.accounts.len(), 3);

        assert_eq!(instruction.accounts[0].pubkey, reviewer);
        assert!(instruction.accounts[0].is_signer);
        assert!(!instruction.accounts[0].is_writable);

        assert_eq!(instruction.accounts[1].pubkey, review_address);
        assert!(!instruction.accounts[1].is_signer);
        assert!(instruction.accounts[1].is_writable);

        assert_eq!(instruction.accounts[2].pubkey, system_program::id());
        assert!(!instruction.accounts[2].is_signer);
        assert!(!instruction.accounts[2].is_writable);
    }

    #[test]
    fn instruction_data_is_the_encoded_review() {
        let reviewer = Pubkey::new_unique();
        let review = MovieReview::new("Heat - (9021)", 4, "Diner scene");
        let (instruction, _) = build_review_instruction(&reviewer, &review).unwrap();
        assert_eq!(instruction.data, review.encode().unwrap());
        assert_eq!(MovieReview::decode(&instruction.data).unwrap(), review);
    }

    #[test]
    fn invalid_review_never_reaches_instruction_assembly() {
        let reviewer = Pubkey::new_unique();
        let review = MovieReview::new("Alien", 6, "In space");
        assert!(matches!(
            build_review_instruction(&reviewer, &review),
            Err(ClientError::Validation(ValidationError::RatingOutOfRange(6)))
        ));
    }
}
