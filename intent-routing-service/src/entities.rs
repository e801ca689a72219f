//! Intent-conditional entity extraction
//!
//! Extraction for one intent never runs for another, and the Unknown branch
//! never produces entities. All checks assume the caller lowercased the
//! input once.

use std::collections::HashMap;

use crate::classification::IntentCategory;
use crate::lexicon::{DATE_PATTERNS, TIME_PATTERNS};

/// Extract the entities relevant to the classified intent.
pub fn extract_entities(text: &str, intent: IntentCategory) -> HashMap<String, String> {
    let mut entities = HashMap::new();

    match intent {
        IntentCategory::AppointmentScheduling => {
            if let Some(time) = extract_time(text) {
                entities.insert("time".to_string(), time);
            }
            if let Some(date) = extract_date(text) {
                entities.insert("date".to_string(), date);
            }

            if text.contains("checkup") || text.contains("check-up") {
                entities.insert("appointment_type".to_string(), "checkup".to_string());
            } else if text.contains("consultation") {
                entities.insert("appointment_type".to_string(), "consultation".to_string());
            }
        }
        IntentCategory::FinancialClearance => {
            if text.contains("medicare") {
                entities.insert("insurance_type".to_string(), "medicare".to_string());
            } else if text.contains("medicaid") {
                entities.insert("insurance_type".to_string(), "medicaid".to_string());
            } else if text.contains("private") || text.contains("insurance") {
                entities.insert("insurance_type".to_string(), "private".to_string());
            }

            if text.contains("copay") || text.contains("co-pay") {
                entities.insert("query_type".to_string(), "copay".to_string());
            } else if text.contains("deductible") {
                entities.insert("query_type".to_string(), "deductible".to_string());
            } else if text.contains("bill") || text.contains("payment") {
                entities.insert("query_type".to_string(), "billing".to_string());
            }
        }
        IntentCategory::GeneralInquiry => {
            if text.contains("hours") || text.contains("open") {
                entities.insert("inquiry_type".to_string(), "hours".to_string());
            } else if text.contains("location") || text.contains("address") || text.contains("directions") {
                entities.insert("inquiry_type".to_string(), "location".to_string());
            } else if text.contains("phone") || text.contains("contact") {
                entities.insert("inquiry_type".to_string(), "contact".to_string());
            }
        }
        IntentCategory::Unknown => {}
    }

    entities
}

/// First time reference in the text, by pattern priority.
fn extract_time(text: &str) -> Option<String> {
    TIME_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}

/// First date reference in the text, by pattern priority.
fn extract_date(text: &str) -> Option<String> {
    DATE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}
