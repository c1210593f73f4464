use std::error::Error;

use reelcast::utils::{explorer, shorten};
use reelcast::{rpc, submit, wallet, MovieReview};

/// The movie review page: validate, encode, derive and broadcast one review.
pub async fn handle_review(
    rpc_url: Option<String>,
    private_key: Option<&str>,
    title: &str,
    rating: u8,
    description: &str,
) -> Result<(), Box<dyn Error>> {
    let wallet = wallet::get_wallet(private_key)?;
    wallet.show_funding_reminder();

    // Suffix first so validation runs against the title that actually goes on
    // the wire and into the seed.
    let review = MovieReview::unique(title, rating, description);
    review.validate()?;

    let rpc = rpc::connect(rpc_url).await?;

    println!("🎬 Submitting review \"{}\" ({}/5)...", review.title, review.rating);
    let outcome = submit::submit_review(&rpc, &wallet.keypair, &review).await?;

    println!("✅ Review submitted!");
    println!("📍 Review account: {}", outcome.review_address);
    println!("📊 Transaction Signature: {}", shorten(&outcome.signature.to_string(), 25));
    explorer::print_explorer_links(&outcome.signature.to_string(), &wallet.address().to_string());
    Ok(())
}
