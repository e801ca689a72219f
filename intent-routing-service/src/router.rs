use async_trait::async_trait;
use tracing::debug;

use crate::classification::{IntentCategory, IntentResult};
use crate::config::IntentConfig;
use crate::entities::extract_entities;
use crate::lexicon::{APPOINTMENT_KEYWORDS, FINANCIAL_KEYWORDS, GENERAL_KEYWORDS};
use crate::score::score_intent;

/// Trait for intent routing implementations
///
/// Implementations can be rule-based pattern matching, ML-based
/// classification, or cloud NLU services; concrete routers are selected at
/// configuration time.
#[async_trait]
pub trait IntentRouter: Send + Sync {
    /// Classify user intent from transcribed text
    async fn route(&self, text: &str) -> IntentResult;

    /// Check if the intent router is operational
    async fn health_check(&self) -> bool;
}

/// Rule-based intent router using keyword matching and pattern tables
///
/// Stateless per call: every invocation reads only the immutable lexicon
/// tables, so the router can be shared freely across request handlers.
///
/// # Example
///
/// ```rust,no_run
/// use intent_routing_service::{IntentRouter, RuleBasedIntentRouter};
///
/// # async fn example() {
/// let router = RuleBasedIntentRouter::default();
/// let result = router.route("I need an appointment next Tuesday at 2pm").await;
/// assert_eq!(result.intent.as_str(), "APPOINTMENT_SCHEDULING");
/// # }
/// ```
pub struct RuleBasedIntentRouter {
    confidence_threshold: f32,
}

impl RuleBasedIntentRouter {
    /// Create a router with an explicit handoff threshold.
    pub fn new(confidence_threshold: f32) -> Self {
        Self { confidence_threshold }
    }

    /// Create a router from loaded configuration.
    pub fn from_config(config: &IntentConfig) -> Self {
        Self::new(config.confidence_threshold)
    }
}

impl Default for RuleBasedIntentRouter {
    fn default() -> Self {
        Self::from_config(&IntentConfig::default())
    }
}

#[async_trait]
impl IntentRouter for RuleBasedIntentRouter {
    async fn route(&self, text: &str) -> IntentResult {
        let text_lower = text.to_lowercase();

        let appointment_score = score_intent(&text_lower, APPOINTMENT_KEYWORDS);
        let financial_score = score_intent(&text_lower, FINANCIAL_KEYWORDS);
        let general_score = score_intent(&text_lower, GENERAL_KEYWORDS);

        let max_score = appointment_score.max(financial_score).max(general_score);

        if max_score == 0 {
            return IntentResult::unknown("No keywords matched any known intent");
        }

        // Fixed-priority tie-break: appointment over financial over general.
        let intent = if appointment_score == max_score {
            IntentCategory::AppointmentScheduling
        } else if financial_score == max_score {
            IntentCategory::FinancialClearance
        } else {
            IntentCategory::GeneralInquiry
        };

        // Three or more keyword matches saturate confidence at 1.0.
        let confidence = (max_score as f32 / 3.0).min(1.0);

        let entities = extract_entities(&text_lower, intent);

        let handoff_recommended = confidence < self.confidence_threshold;

        let reasoning = format!("Matched {} keywords for {}", max_score, intent);

        debug!(
            intent = %intent,
            confidence,
            matched_keywords = max_score,
            handoff_recommended,
            "intent classified"
        );

        IntentResult {
            intent,
            confidence,
            entities,
            handoff_recommended,
            reasoning: Some(reasoning),
        }
    }

    async fn health_check(&self) -> bool {
        // Nothing external to probe for the rule-based implementation.
        true
    }
}
