//! Augmentation orchestrator
//!
//! Produces the three AI-derived fields for one normalized submission. The
//! response and action calls always go to the generation backend; the
//! summary call is skipped for no-text submissions, whose summary is a
//! deterministic string. The calls run concurrently and each outcome
//! resolves independently: a failed call substitutes that field's fallback
//! and the others are unaffected, so `augment` itself cannot fail and
//! submission success never depends on backend availability.

use tracing::warn;

use crate::llm::fallback::{fallback_action, fallback_response, fallback_summary};
use crate::llm::prompts::{action_prompt, no_feedback_summary, response_prompt, summary_prompt};
use crate::llm::TextGenerator;
use crate::review::normalize::NormalizedSubmission;

/// The three AI-derived fields of a record
///
/// Every field is non-empty, sourced from generation or fallback; the
/// origin is not tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedFields {
    pub ai_response: String,
    pub ai_summary: String,
    pub recommended_action: String,
}

/// Generate all three fields for a submission
pub async fn augment(
    generator: &dyn TextGenerator,
    submission: &NormalizedSubmission,
) -> AugmentedFields {
    let rating = submission.rating;
    let text = submission.review_text.as_str();

    let response = generate_or_fallback(
        generator,
        response_prompt(rating, text),
        fallback_response(rating),
        "ai_response",
    );

    let summary = async {
        if submission.has_no_text() {
            no_feedback_summary(rating)
        } else {
            generate_or_fallback(
                generator,
                summary_prompt(rating, text),
                fallback_summary(rating),
                "ai_summary",
            )
            .await
        }
    };

    let action = generate_or_fallback(
        generator,
        action_prompt(rating, text),
        fallback_action(rating),
        "recommended_action",
    );

    let (ai_response, ai_summary, recommended_action) = tokio::join!(response, summary, action);

    AugmentedFields {
        ai_response,
        ai_summary,
        recommended_action,
    }
}

/// Resolve one generation call, substituting the fallback on failure
async fn generate_or_fallback(
    generator: &dyn TextGenerator,
    prompt: String,
    fallback: String,
    field: &str,
) -> String {
    match generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(field, error = %e, "Generation failed, using fallback text");
            fallback
        }
    }
}
