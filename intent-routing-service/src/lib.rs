//! Intent Routing Service for Front Office Voice Workflows
//!
//! Provides rule-based intent classification and entity extraction for
//! medical front office calls, with **deterministic** scoring and
//! templated response generation.
//!
//! # Recognized Intents
//!
//! - **Appointment Scheduling** - booking, rescheduling, visit requests
//! - **Financial Clearance** - insurance, copay, deductible, billing
//! - **General Inquiry** - hours, location, contact information
//! - **Unknown** - nothing matched; a human handoff is always recommended
//!
//! # Features
//!
//! - Keyword lexicons and ordered regex pattern tables, compiled once and
//!   shared read-only across request handlers
//! - Match-count confidence normalized to [0, 1]
//! - Intent-conditional entity extraction (date, time, appointment type,
//!   insurance type, query type, inquiry type)
//! - Natural-language response templates per intent
//! - Configurable handoff threshold
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use intent_routing_service::{IntentConfig, IntentRouter, RuleBasedIntentRouter};
//! use intent_routing_service::response::generate_response;
//!
//! # async fn example() {
//! let router = RuleBasedIntentRouter::from_config(&IntentConfig::from_env());
//!
//! let result = router.route("I need an appointment next Tuesday at 2 PM").await;
//! println!("{} ({:.2})", result.intent, result.confidence);
//!
//! let reply = generate_response(&result);
//! println!("{}", reply);
//! # }
//! ```

pub mod classification;
pub mod config;
pub mod entities;
pub mod lexicon;
pub mod response;
pub mod router;
pub mod score;

pub use classification::*;
pub use config::*;
pub use router::*;
