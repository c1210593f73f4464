use reelcast::history::HistoryEntry;
use reelcast::review::MovieReview;

/// A review shaped the way the submission flow produces them (title already
/// suffixed).
pub fn sample_review() -> MovieReview {
    MovieReview::new("Stalker - (4979)", 5, "The Zone grants wishes")
}

/// A canned indexer response body: address-scoped transaction records with a
/// signature plus opaque extra fields.
pub fn sample_history_body() -> &'static str {
    r#"[
        {
            "signature": "5UfDuX94A1QfqkQvg5WBvM3WeYZ58DSkGbrqJSkEPFTzBNzvfGUKHjNFWprrBfucrJKPk6rzZb7rpRo1dLaJLh9p",
            "type": "TRANSFER",
            "fee": 5000,
            "slot": 250913041,
            "timestamp": 1710092870,
            "err": null
        },
        {
            "signature": "2rV3nQ8dP6yTfZ1mKWAos7vLhCJ9eGxyBkDRiE4wUqSM",
            "type": "UNKNOWN",
            "fee": 5000,
            "slot": 250913100,
            "timestamp": 1710092999,
            "err": null
        }
    ]"#
}

pub fn sample_history() -> Vec<HistoryEntry> {
    serde_json::from_str(sample_history_body()).expect("canned history body parses")
}
