//! Keyword lexicons and entity pattern tables
//!
//! Pure data: keyword sets per intent category and ordered regex tables for
//! date/time extraction. Everything here is initialized once and read-only
//! for the life of the process; concurrent readers need no synchronization.

use lazy_static::lazy_static;
use regex::Regex;

/// Keywords signalling an appointment scheduling request
pub const APPOINTMENT_KEYWORDS: &[&str] = &[
    "appointment",
    "schedule",
    "booking",
    "book",
    "see the doctor",
    "visit",
    "consultation",
    "checkup",
    "check-up",
    "meeting",
    "arrangement",
    "assignation",
];

/// Keywords signalling insurance and payment questions
pub const FINANCIAL_KEYWORDS: &[&str] = &[
    "insurance",
    "coverage",
    "copay",
    "co-pay",
    "deductible",
    "bill",
    "payment",
    "cost",
    "price",
    "charge",
    "fee",
    "financial",
    "money",
];

/// Keywords signalling general information requests
pub const GENERAL_KEYWORDS: &[&str] = &[
    "hours",
    "location",
    "address",
    "phone",
    "contact",
    "directions",
    "parking",
    "questions",
    "information",
    "help",
];

lazy_static! {
    /// Time reference patterns, evaluated in order; first match wins.
    ///
    /// The clock-time pattern accepts "2 pm" as well as "2:30 pm" (minutes
    /// optional). Input is lowercased by the caller; the (?i) flag also
    /// tolerates mixed case defensively.
    pub static ref TIME_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b").unwrap(),
        Regex::new(r"(?i)\b(morning|afternoon|evening|noon)\b").unwrap(),
    ];

    /// Date reference patterns, evaluated in order; first match wins.
    pub static ref DATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b").unwrap(),
        Regex::new(r"(?i)\b(today|tomorrow|next week|this week)\b").unwrap(),
        Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b").unwrap(),
    ];
}
