//! The review record itself: validation, the uniqueness suffix and the wire
//! codec on top of the declared layout.

use borsh::{BorshDeserialize, BorshSerialize};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ValidationError};
use crate::layout::{Field, FieldKind, Layout, Value, MAX_PAYLOAD_LEN};

/// Instruction tag the review program understands for "add movie review".
pub const REVIEW_VARIANT: u8 = 0;
pub const MAX_RATING: u8 = 5;
/// The derivation seed is the full title, so it is bounded by the chain's
/// 32-byte seed limit. The ` - (nnnn)` uniqueness suffix takes 9 of those.
pub const MAX_SEED_BYTES: usize = 32;
pub const MAX_RAW_TITLE_BYTES: usize = MAX_SEED_BYTES - 9;

// Field order is the wire format; the program rejects anything reordered.
static REVIEW_FIELDS: [Field; 4] = [
    Field { name: "variant", kind: FieldKind::U8 },
    Field { name: "title", kind: FieldKind::Str },
    Field { name: "rating", kind: FieldKind::U8 },
    Field { name: "description", kind: FieldKind::Str },
];

/// A single movie review, constructed per submission and discarded after
/// send. The borsh derives mirror the layout exactly and are cross-checked in
/// tests.
#[derive(Debug, Clone, Serialize, Deserialize, BorshSerialize, BorshDeserialize, PartialEq, Eq)]
pub struct MovieReview {
    pub variant: u8,
    pub title: String,
    pub rating: u8,
    pub description: String,
}

impl MovieReview {
    pub fn new(title: impl Into<String>, rating: u8, description: impl Into<String>) -> Self {
        Self { variant: REVIEW_VARIANT, title: title.into(), rating, description: description.into() }
    }

    /// Build a review whose title carries a random 4-digit suffix, so repeated
    /// submissions of the same movie by the same reviewer derive distinct
    /// review addresses.
    pub fn unique(title: &str, rating: u8, description: impl Into<String>) -> Self {
        let suffix: u16 = rand::thread_rng().gen_range(1000..10000);
        Self::new(format!("{title} - ({suffix})"), rating, description)
    }

    pub fn layout() -> Layout {
        Layout::new(&REVIEW_FIELDS)
    }

    /// Reject bad input before anything is encoded or sent (rating bound,
    /// empty fields, seed-length bound, payload bound).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.rating > MAX_RATING {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }
        if self.title.len() > MAX_SEED_BYTES {
            return Err(ValidationError::TitleTooLong(self.title.len()));
        }
        let span = 1 + 4 + self.title.len() + 1 + 4 + self.description.len();
        if span > MAX_PAYLOAD_LEN {
            return Err(ValidationError::PayloadTooLarge(span));
        }
        Ok(())
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::U8(self.variant),
            Value::Str(self.title.clone()),
            Value::U8(self.rating),
            Value::Str(self.description.clone()),
        ]
    }

    /// Serialize the record for the instruction data field.
    pub fn encode(&self) -> Result<Vec<u8>, ClientError> {
        self.validate()?;
        Ok(Self::layout().encode(&self.values())?)
    }

    /// Strict inverse of [`MovieReview::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, ClientError> {
        let values = Self::layout().decode(bytes)?;
        // The layout guarantees arity and kinds, so the accessors cannot miss.
        let variant = values[0].as_u8().unwrap_or_default();
        if variant != REVIEW_VARIANT {
            return Err(ValidationError::UnknownVariant(variant).into());
        }
        Ok(Self {
            variant,
            title: values[1].as_str().unwrap_or_default().to_string(),
            rating: values[2].as_u8().unwrap_or_default(),
            description: values[3].as_str().unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_exactly() {
        let review = MovieReview::new("Dune - (1234)", 5, "Epic");
        let bytes = review.encode().unwrap();
        assert_eq!(MovieReview::decode(&bytes).unwrap(), review);
    }

    #[test]
    fn encoded_span_matches_declared_layout() {
        // 1 tag + 4 prefix + 13 title + 1 rating + 4 prefix + 4 description
        let review = MovieReview::new("Dune - (1234)", 5, "Epic");
        assert_eq!(review.encode().unwrap().len(), 1 + 4 + 13 + 1 + 4 + 4);
    }

    #[test]
    fn schema_encoding_matches_borsh() {
        let review = MovieReview::new("The Thing - (4821)", 4, "Cold and paranoid");
        assert_eq!(review.encode().unwrap(), borsh::to_vec(&review).unwrap());
    }

    #[test]
    fn rating_out_of_bound_is_rejected_before_encoding() {
        let review = MovieReview::new("Alien", 6, "In space");
        assert_eq!(review.validate().unwrap_err(), ValidationError::RatingOutOfRange(6));
        assert!(review.encode().is_err());
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(MovieReview::new("  ", 3, "desc").validate().unwrap_err(), ValidationError::EmptyTitle);
        assert_eq!(MovieReview::new("Heat", 3, "").validate().unwrap_err(), ValidationError::EmptyDescription);
    }

    #[test]
    fn oversized_title_is_rejected_for_seed_derivation() {
        let review = MovieReview::new("a".repeat(MAX_SEED_BYTES + 1), 3, "desc");
        assert!(matches!(review.validate().unwrap_err(), ValidationError::TitleTooLong(_)));
    }

    #[test]
    fn oversized_description_is_rejected_not_truncated() {
        let review = MovieReview::new("Short", 3, "d".repeat(MAX_PAYLOAD_LEN));
        assert!(matches!(review.validate().unwrap_err(), ValidationError::PayloadTooLarge(_)));
    }

    #[test]
    fn unique_titles_carry_a_four_digit_suffix() {
        let review = MovieReview::unique("Dune", 5, "Epic");
        assert!(review.title.starts_with("Dune - ("));
        assert!(review.title.ends_with(')'));
        let digits = &review.title["Dune - (".len()..review.title.len() - 1];
        assert_eq!(digits.len(), 4);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn decode_rejects_unknown_tag() {
        let mut bytes = MovieReview::new("Dune", 5, "Epic").encode().unwrap();
        bytes[0] = 9;
        assert!(matches!(
            MovieReview::decode(&bytes),
            Err(ClientError::Validation(ValidationError::UnknownVariant(9)))
        ));
    }
}
