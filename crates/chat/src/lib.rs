//! `kontor-chat`
//!
//! **Responsibility:** chat-driven interaction boundary.
//!
//! The current classifier is a keyword matcher, intentionally a placeholder
//! for a future natural-language intent model. The dispatch contract
//! ([`IntentClassifier`] → [`ChatRouter`]) is what the rest of the system
//! depends on; swapping the classifier must not touch it.
//!
//! This crate must not mutate domain state: routing produces invoice
//! *previews*, not persisted invoices.

pub mod intent;
pub mod router;

pub use intent::{ChatIntent, IntentClassifier, KeywordClassifier};
pub use router::{ChatOutcome, ChatReply, ChatRouter, DraftHandler, TurnState, FALLBACK_REPLY};
