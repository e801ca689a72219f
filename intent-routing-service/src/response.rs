//! Natural-language response generation
//!
//! Pure template lookup over (intent, entities). The branching order is a
//! behavior contract: date+time before date-only, copay before deductible
//! before insurance-type, hours before location before contact.

use crate::classification::{IntentCategory, IntentResult};

/// Generate a spoken/textual reply for a classification result.
pub fn generate_response(result: &IntentResult) -> String {
    let entities = &result.entities;

    match result.intent {
        IntentCategory::AppointmentScheduling => {
            let time = entities.get("time");
            let date = entities.get("date");

            match (date, time) {
                (Some(date), Some(time)) => format!(
                    "I can help you schedule an appointment for {} at {}. \
                     Let me check our availability and get you booked.",
                    date, time
                ),
                (Some(date), None) => format!(
                    "I can help you schedule an appointment for {}. What time works best for you?",
                    date
                ),
                _ => "I can help you schedule an appointment. \
                      What day and time would work best for you?"
                    .to_string(),
            }
        }
        IntentCategory::FinancialClearance => {
            let query_type = entities.get("query_type").map(String::as_str);

            match query_type {
                Some("copay") => "I can help you understand your copay. \
                                  Let me look up your insurance information and provide specific details."
                    .to_string(),
                Some("deductible") => "I can help you with deductible information. \
                                       Let me check your coverage details."
                    .to_string(),
                _ => match entities.get("insurance_type") {
                    Some(insurance_type) => format!(
                        "I can help you with your {} coverage questions. \
                         What specific information do you need?",
                        insurance_type
                    ),
                    None => "I can help you with insurance and billing questions. \
                             What would you like to know?"
                        .to_string(),
                },
            }
        }
        IntentCategory::GeneralInquiry => {
            match entities.get("inquiry_type").map(String::as_str) {
                Some("hours") => "Our office hours are Monday through Friday, 8 AM to 5 PM. \
                                  We're closed on weekends and major holidays."
                    .to_string(),
                Some("location") => "We're located at 123 Medical Plaza Drive, Suite 100. \
                                     There's ample parking available in the adjacent lot."
                    .to_string(),
                Some("contact") => "You can reach us at 555-0100. \
                                    For urgent matters, please call our after-hours line."
                    .to_string(),
                _ => "I'm here to help answer your questions. What information can I provide?"
                    .to_string(),
            }
        }
        IntentCategory::Unknown => "I'm here to help. Could you please clarify what you need assistance with? \
                                    I can help with appointments, billing, or general information."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn result_with(intent: IntentCategory, pairs: &[(&str, &str)]) -> IntentResult {
        let entities: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        IntentResult {
            intent,
            confidence: 1.0,
            entities,
            handoff_recommended: false,
            reasoning: None,
        }
    }

    #[test]
    fn test_appointment_with_date_and_time() {
        let result = result_with(
            IntentCategory::AppointmentScheduling,
            &[("date", "tuesday"), ("time", "2 pm")],
        );
        let reply = generate_response(&result);
        assert!(reply.contains("for tuesday at 2 pm"));
        assert!(reply.contains("get you booked"));
    }

    #[test]
    fn test_appointment_with_date_only() {
        let result = result_with(IntentCategory::AppointmentScheduling, &[("date", "tomorrow")]);
        let reply = generate_response(&result);
        assert!(reply.contains("for tomorrow"));
        assert!(reply.contains("What time works best"));
    }

    #[test]
    fn test_appointment_with_time_only_falls_through_to_generic() {
        // A time without a date still asks for the full slot
        let result = result_with(IntentCategory::AppointmentScheduling, &[("time", "2 pm")]);
        let reply = generate_response(&result);
        assert!(reply.contains("What day and time would work best"));
    }

    #[test]
    fn test_copay_outranks_insurance_type() {
        let result = result_with(
            IntentCategory::FinancialClearance,
            &[("query_type", "copay"), ("insurance_type", "medicare")],
        );
        assert!(generate_response(&result).contains("understand your copay"));
    }

    #[test]
    fn test_deductible_response() {
        let result = result_with(IntentCategory::FinancialClearance, &[("query_type", "deductible")]);
        assert!(generate_response(&result).contains("deductible information"));
    }

    #[test]
    fn test_insurance_type_used_when_query_is_billing() {
        let result = result_with(
            IntentCategory::FinancialClearance,
            &[("query_type", "billing"), ("insurance_type", "medicaid")],
        );
        assert!(generate_response(&result).contains("your medicaid coverage"));
    }

    #[test]
    fn test_generic_financial_fallback() {
        let result = result_with(IntentCategory::FinancialClearance, &[]);
        assert!(generate_response(&result).contains("insurance and billing questions"));
    }

    #[test]
    fn test_fixed_hours_statement() {
        let result = result_with(IntentCategory::GeneralInquiry, &[("inquiry_type", "hours")]);
        assert_eq!(
            generate_response(&result),
            "Our office hours are Monday through Friday, 8 AM to 5 PM. \
             We're closed on weekends and major holidays."
        );
    }

    #[test]
    fn test_fixed_location_and_contact_statements() {
        let location = result_with(IntentCategory::GeneralInquiry, &[("inquiry_type", "location")]);
        assert!(generate_response(&location).contains("123 Medical Plaza Drive"));

        let contact = result_with(IntentCategory::GeneralInquiry, &[("inquiry_type", "contact")]);
        assert!(generate_response(&contact).contains("555-0100"));
    }

    #[test]
    fn test_unknown_offers_clarification() {
        let result = result_with(IntentCategory::Unknown, &[]);
        let reply = generate_response(&result);
        assert!(reply.contains("appointments, billing, or general information"));
    }
}
