use integration_tests::support::sample_review;
use reelcast::address::{derive_review_address, PROGRAM_ID};
use reelcast::error::{ClientError, ValidationError};
use reelcast::review::MovieReview;
use reelcast::submit::build_review_instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

#[test]
fn full_pipeline_from_record_to_instruction() {
    let reviewer = Pubkey::new_unique();
    let review = sample_review();

    let (instruction, review_address) = build_review_instruction(&reviewer, &review).unwrap();

    // The instruction targets the review program with the three fixed
    // accounts and carries the encoded record as data.
    assert_eq!(instruction.program_id, PROGRAM_ID);
    let metas: Vec<(Pubkey, bool, bool)> =
        instruction.accounts.iter().map(|m| (m.pubkey, m.is_signer, m.is_writable)).collect();
    assert_eq!(
        metas,
        vec![
            (reviewer, true, false),
            (review_address, false, true),
            (system_program::id(), false, false),
        ]
    );

    // The derived address is reproducible from the same inputs.
    let (derived_again, _) = derive_review_address(&reviewer, &review.title).unwrap();
    assert_eq!(derived_again, review_address);

    // And the payload round-trips through the wire format.
    assert_eq!(MovieReview::decode(&instruction.data).unwrap(), review);
}

#[test]
fn schema_encoding_agrees_with_borsh_reference() {
    let review = sample_review();
    assert_eq!(review.encode().unwrap(), borsh::to_vec(&review).unwrap());
}

#[test]
fn repeated_unique_submissions_rarely_collide() {
    let reviewer = Pubkey::new_unique();
    let mut addresses = std::collections::HashSet::new();
    for _ in 0..16 {
        let review = MovieReview::unique("Solaris", 4, "The ocean thinks");
        let (address, _) = derive_review_address(&reviewer, &review.title).unwrap();
        addresses.insert(address);
    }
    // 16 draws over 9000 suffixes; allow at most one birthday collision.
    assert!(addresses.len() >= 15);
}

#[test]
fn validation_failures_stop_the_pipeline_before_any_assembly() {
    let reviewer = Pubkey::new_unique();

    let bad_rating = MovieReview::new("Alien - (1111)", 6, "In space");
    assert!(matches!(
        build_review_instruction(&reviewer, &bad_rating),
        Err(ClientError::Validation(ValidationError::RatingOutOfRange(6)))
    ));

    let empty_title = MovieReview::new("", 3, "No name");
    assert!(matches!(
        build_review_instruction(&reviewer, &empty_title),
        Err(ClientError::Validation(ValidationError::EmptyTitle))
    ));
}
