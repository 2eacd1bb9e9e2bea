//! Prompt builders
//!
//! Pure functions of `(rating, review_text)`. Each augmented field has its
//! own prompt; the orchestrator decides which ones actually reach the
//! generation backend.

use crate::review::normalize::EMPTY_REVIEW_SENTINEL;

/// Prompt for the user-facing thank-you response
pub fn response_prompt(rating: u8, review_text: &str) -> String {
    if review_text == EMPTY_REVIEW_SENTINEL {
        return format!(
            "Generate a brief, professional thank you message for a customer \
             who submitted a {rating}-star rating without any written review.\n\
             \n\
             Keep it warm, genuine, and under 50 words."
        );
    }

    format!(
        "A customer submitted a {rating}-star review:\n\
         \n\
         \"{review_text}\"\n\
         \n\
         Generate a personalized, professional response thanking them for \
         their feedback.\n\
         \n\
         Guidelines:\n\
         - For 4-5 stars: Express gratitude and enthusiasm\n\
         - For 3 stars: Thank them and acknowledge room for improvement\n\
         - For 1-2 stars: Apologize sincerely and commit to improvement\n\
         \n\
         Keep response under 100 words, warm and genuine."
    )
}

/// Prompt for the internal admin summary
///
/// Only used for reviews with actual text. When no text was provided the
/// summary is the deterministic [`no_feedback_summary`] and no generation
/// call is made.
pub fn summary_prompt(rating: u8, review_text: &str) -> String {
    format!(
        "Summarize this {rating}-star customer review in 1-2 sentences, \
         highlighting key points:\n\
         \n\
         \"{review_text}\"\n\
         \n\
         Focus on main concerns, praise, or issues mentioned. Be concise and \
         factual."
    )
}

/// Deterministic summary for submissions with no written review
pub fn no_feedback_summary(rating: u8) -> String {
    format!("Customer submitted a {rating}-star rating with no written feedback.")
}

/// Prompt for the recommended next actions
pub fn action_prompt(rating: u8, review_text: &str) -> String {
    let sentiment = sentiment_label(rating);

    if review_text == EMPTY_REVIEW_SENTINEL {
        return format!(
            "A customer submitted a {rating}-star rating ({sentiment} feedback) \
             with no written review.\n\
             \n\
             Recommend specific actions the business should take. Consider:\n\
             - Follow-up communication needs\n\
             - Urgency level\n\
             - Investigation requirements\n\
             \n\
             Provide 2-3 specific, actionable recommendations in bullet points."
        );
    }

    format!(
        "A customer submitted {sentiment} feedback ({rating} stars):\n\
         \n\
         \"{review_text}\"\n\
         \n\
         Recommend specific actions the business should take. Consider:\n\
         - Specific issues/praise mentioned\n\
         - Urgency and priority\n\
         - Follow-up needs\n\
         - Process improvements\n\
         \n\
         Provide 2-3 specific, actionable recommendations in bullet points."
    )
}

/// Map a rating to its sentiment label
pub fn sentiment_label(rating: u8) -> &'static str {
    match rating {
        1 => "extremely negative",
        2 => "negative",
        3 => "neutral/mixed",
        4 => "positive",
        5 => "very positive",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_prompt_empty_review_variant() {
        let prompt = response_prompt(4, EMPTY_REVIEW_SENTINEL);
        assert!(prompt.contains("without any written review"));
        assert!(prompt.contains("4-star"));
        assert!(!prompt.contains(EMPTY_REVIEW_SENTINEL));
    }

    #[test]
    fn test_response_prompt_includes_review_text() {
        let prompt = response_prompt(2, "Slow delivery");
        assert!(prompt.contains("\"Slow delivery\""));
        assert!(prompt.contains("2-star"));
        assert!(prompt.contains("Apologize sincerely"));
    }

    #[test]
    fn test_summary_prompt_includes_review_text() {
        let prompt = summary_prompt(3, "Average food, nice staff");
        assert!(prompt.contains("\"Average food, nice staff\""));
        assert!(prompt.contains("3-star"));
    }

    #[test]
    fn test_no_feedback_summary_text() {
        assert_eq!(
            no_feedback_summary(5),
            "Customer submitted a 5-star rating with no written feedback."
        );
    }

    #[test]
    fn test_action_prompt_carries_sentiment() {
        let prompt = action_prompt(1, "terrible");
        assert!(prompt.contains("extremely negative"));
        assert!(prompt.contains("(1 stars)"));

        let prompt = action_prompt(5, EMPTY_REVIEW_SENTINEL);
        assert!(prompt.contains("very positive"));
        assert!(prompt.contains("with no written review"));
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(sentiment_label(1), "extremely negative");
        assert_eq!(sentiment_label(2), "negative");
        assert_eq!(sentiment_label(3), "neutral/mixed");
        assert_eq!(sentiment_label(4), "positive");
        assert_eq!(sentiment_label(5), "very positive");
        assert_eq!(sentiment_label(0), "unknown");
    }
}
