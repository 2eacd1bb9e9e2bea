//! Submission validation and normalization

use fbs_common::{Error, Result};

/// Placeholder stored when the customer wrote no review text
pub const EMPTY_REVIEW_SENTINEL: &str = "[No review text provided]";

/// Maximum review length in characters; longer text is truncated
pub const MAX_REVIEW_CHARS: usize = 10_000;

/// A validated, normalized submission
///
/// `rating` is guaranteed in 1..=5 and `review_text` is never empty: the
/// rest of the pipeline relies on both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSubmission {
    pub rating: u8,
    pub review_text: String,
}

impl NormalizedSubmission {
    /// Whether the customer submitted a rating without written text
    pub fn has_no_text(&self) -> bool {
        self.review_text == EMPTY_REVIEW_SENTINEL
    }
}

/// Validate and normalize a raw submission
///
/// Rules, applied in order:
/// 1. Reject ratings outside 1..=5.
/// 2. Trim surrounding whitespace; a missing text is treated as empty.
/// 3. Replace empty text with [`EMPTY_REVIEW_SENTINEL`].
/// 4. Truncate text beyond [`MAX_REVIEW_CHARS`] characters and append "...".
pub fn normalize(rating: i64, raw_text: Option<&str>) -> Result<NormalizedSubmission> {
    if !(1..=5).contains(&rating) {
        return Err(Error::Validation(format!(
            "Rating must be between 1 and 5 (got {rating})"
        )));
    }

    let trimmed = raw_text.unwrap_or("").trim();

    let review_text = if trimmed.is_empty() {
        EMPTY_REVIEW_SENTINEL.to_string()
    } else if trimmed.chars().count() > MAX_REVIEW_CHARS {
        let mut truncated: String = trimmed.chars().take(MAX_REVIEW_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        trimmed.to_string()
    };

    Ok(NormalizedSubmission {
        rating: rating as u8,
        review_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_outside_range_rejected() {
        for rating in [-1, 0, 6, 100] {
            let result = normalize(rating, Some("fine"));
            assert!(
                matches!(result, Err(Error::Validation(_))),
                "rating {} should be rejected",
                rating
            );
        }
    }

    #[test]
    fn test_ratings_in_range_accepted() {
        for rating in 1..=5 {
            let normalized = normalize(rating, Some("fine")).unwrap();
            assert_eq!(normalized.rating, rating as u8);
        }
    }

    #[test]
    fn test_text_is_trimmed() {
        let normalized = normalize(4, Some("  great service \n")).unwrap();
        assert_eq!(normalized.review_text, "great service");
    }

    #[test]
    fn test_empty_text_becomes_sentinel() {
        for raw in [None, Some(""), Some("   "), Some("\t\n")] {
            let normalized = normalize(3, raw).unwrap();
            assert_eq!(normalized.review_text, EMPTY_REVIEW_SENTINEL);
            assert!(normalized.has_no_text());
        }
    }

    #[test]
    fn test_long_text_truncated_with_ellipsis() {
        let raw = "x".repeat(MAX_REVIEW_CHARS + 500);
        let normalized = normalize(5, Some(&raw)).unwrap();
        assert_eq!(normalized.review_text.chars().count(), MAX_REVIEW_CHARS + 3);
        assert!(normalized.review_text.ends_with("..."));
    }

    #[test]
    fn test_text_at_cap_untouched() {
        let raw = "y".repeat(MAX_REVIEW_CHARS);
        let normalized = normalize(5, Some(&raw)).unwrap();
        assert_eq!(normalized.review_text, raw);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // Multi-byte characters must not be split mid-codepoint
        let raw = "é".repeat(MAX_REVIEW_CHARS + 1);
        let normalized = normalize(2, Some(&raw)).unwrap();
        assert_eq!(normalized.review_text.chars().count(), MAX_REVIEW_CHARS + 3);
        assert!(normalized.review_text.ends_with("..."));
    }
}
