use serde::{Deserialize, Serialize};

/// Default minimum confidence before a human handoff is recommended
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Intent routing configuration
///
/// Constructed once at process start and passed into the router; there is
/// no ambient settings lookup inside the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentConfig {
    /// Minimum confidence for automated handling; below this the result
    /// carries a handoff recommendation
    pub confidence_threshold: f32,
}

impl IntentConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let confidence_threshold = std::env::var("INTENT_CONFIDENCE_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD);

        Self { confidence_threshold }
    }
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}
