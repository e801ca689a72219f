//! PII redaction for voice transcripts
//!
//! Transcripts of front-office calls routinely contain phone numbers,
//! social security numbers, emails, dates of birth, and patient names.
//! This crate scrubs them before a transcript is returned to a client or
//! written to a log, supporting a HIPAA-minded deployment.
//!
//! # Detected Data Types
//!
//! - **Phone Numbers**: 555-123-4567 → [PHONE]
//! - **SSN**: 123-45-6789 → [SSN]
//! - **Email Addresses**: user@example.com → [EMAIL]
//! - **Numeric Dates** (aggressive mode): 4/12/1985 → [DATE]
//! - **Common First Names** (aggressive mode): John → [NAME]
//!
//! With `hash_for_correlation` enabled, redacted values become
//! `TYPE[shorthash]` so the same value can still be correlated across log
//! lines without exposing it.
//!
//! # Example
//!
//! ```rust
//! use transcript_redaction::TranscriptRedactor;
//!
//! let redactor = TranscriptRedactor::aggressive();
//! let redacted = redactor.redact("Hi, I'm John. My number is 555-123-4567.");
//! assert_eq!(redacted, "Hi, I'm [NAME] My number is [PHONE].");
//! ```

pub mod redactor;

pub use redactor::*;
