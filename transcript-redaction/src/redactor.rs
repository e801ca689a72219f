use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap();
    static ref SSN_REGEX: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref DATE_REGEX: Regex = Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap();
}

/// Abbreviated first-name list for word-level name redaction.
///
/// A production deployment would swap this for NER; the list covers the
/// most common US first names seen in front-office transcripts.
const COMMON_FIRST_NAMES: &[&str] = &[
    "john", "mary", "james", "patricia", "robert", "jennifer", "michael", "linda", "william",
    "elizabeth", "david", "barbara", "richard", "susan", "joseph", "jessica", "thomas", "sarah",
    "charles", "karen",
];

/// PII redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_phones: bool,
    pub redact_ssn: bool,
    pub redact_emails: bool,
    /// Also redact common first names and numeric dates
    pub aggressive: bool,
    /// Replace values with `TYPE[shorthash]` instead of `[TYPE]` so they
    /// remain correlatable across log lines
    pub hash_for_correlation: bool,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_phones: true,
            redact_ssn: true,
            redact_emails: true,
            aggressive: false,
            hash_for_correlation: false,
        }
    }
}

/// Kind of PII found in a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiiKind {
    Phone,
    Ssn,
    Email,
}

impl PiiKind {
    fn label(&self) -> &'static str {
        match self {
            PiiKind::Phone => "PHONE",
            PiiKind::Ssn => "SSN",
            PiiKind::Email => "EMAIL",
        }
    }
}

/// Transcript redactor applying the configured rules in a fixed order:
/// phones, SSNs, emails, then (aggressive only) names and dates.
pub struct TranscriptRedactor {
    config: RedactionConfig,
}

impl TranscriptRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    /// Redactor that also scrubs names and numeric dates.
    pub fn aggressive() -> Self {
        Self::new(RedactionConfig {
            aggressive: true,
            ..RedactionConfig::default()
        })
    }

    /// Apply all configured redaction rules to a transcript.
    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_phones {
            result = self.redact_pattern(&result, &PHONE_REGEX, PiiKind::Phone.label());
        }
        if self.config.redact_ssn {
            result = self.redact_pattern(&result, &SSN_REGEX, PiiKind::Ssn.label());
        }
        if self.config.redact_emails {
            result = self.redact_pattern(&result, &EMAIL_REGEX, PiiKind::Email.label());
        }

        if self.config.aggressive {
            result = self.redact_names(&result);
            result = self.redact_pattern(&result, &DATE_REGEX, "DATE");
        }

        result
    }

    /// Extract the PII found in a transcript, for auditing what a redaction
    /// pass removed.
    pub fn redacted_entities(&self, text: &str) -> Vec<(PiiKind, String)> {
        let mut entities = Vec::new();

        for m in PHONE_REGEX.find_iter(text) {
            entities.push((PiiKind::Phone, m.as_str().to_string()));
        }
        for m in EMAIL_REGEX.find_iter(text) {
            entities.push((PiiKind::Email, m.as_str().to_string()));
        }
        for m in SSN_REGEX.find_iter(text) {
            entities.push((PiiKind::Ssn, m.as_str().to_string()));
        }

        entities
    }

    fn redact_pattern(&self, text: &str, pattern: &Regex, label: &str) -> String {
        pattern
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("{}[{}]", label, self.hash_value(&caps[0]))
                } else {
                    format!("[{}]", label)
                }
            })
            .to_string()
    }

    /// Word-level name redaction against the common-names list.
    ///
    /// Punctuation is stripped for comparison only; a matched word is
    /// replaced wholesale. Whitespace is normalized to single spaces.
    fn redact_names(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| {
                let clean = word.trim_matches(|c: char| ".,!?;:".contains(c)).to_lowercase();
                if COMMON_FIRST_NAMES.contains(&clean.as_str()) {
                    "[NAME]"
                } else {
                    word
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let digest = hasher.finalize();
        // First 8 bytes keep the token short while staying collision-safe
        // for correlation purposes.
        general_purpose::STANDARD.encode(&digest[..8])
    }
}

impl Default for TranscriptRedactor {
    fn default() -> Self {
        Self::new(RedactionConfig::default())
    }
}
