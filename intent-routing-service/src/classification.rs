use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Caller intent category
///
/// Closed set; the wire form is the SCREAMING_SNAKE_CASE label used in API
/// responses and classification reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentCategory {
    /// Requests to book/modify appointments
    AppointmentScheduling,
    /// Insurance and payment questions
    FinancialClearance,
    /// Hours, location, and other information requests
    GeneralInquiry,
    /// No keywords matched any known intent
    Unknown,
}

impl IntentCategory {
    /// Wire label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::AppointmentScheduling => "APPOINTMENT_SCHEDULING",
            IntentCategory::FinancialClearance => "FINANCIAL_CLEARANCE",
            IntentCategory::GeneralInquiry => "GENERAL_INQUIRY",
            IntentCategory::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a single utterance
///
/// Produced fresh per call and never mutated afterwards. Entity keys are
/// intent-specific; an absent key means "not detected", never an empty
/// string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    pub intent: IntentCategory,
    /// Normalized match-count score in [0, 1]; not a calibrated probability
    pub confidence: f32,
    pub entities: HashMap<String, String>,
    /// Whether confidence is too low for automated handling
    pub handoff_recommended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl IntentResult {
    /// Terminal result for input that matched no lexicon at all
    pub fn unknown(reasoning: impl Into<String>) -> Self {
        Self {
            intent: IntentCategory::Unknown,
            confidence: 0.0,
            entities: HashMap::new(),
            handoff_recommended: true,
            reasoning: Some(reasoning.into()),
        }
    }
}
