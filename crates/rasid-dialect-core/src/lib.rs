// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Arabic text analysis core for Rasid.
//!
//! This crate provides the pure text pipeline behind Rasid's social-listening
//! analysis: normalization of raw Arabic text, validation with typed failure
//! kinds, dialect classification against a curated Jordanian marker set, and
//! lexicon-based sentiment scoring.
//!
//! Every function here is total and deterministic: no I/O, no shared mutable
//! state, no panics. Callers may invoke them concurrently without
//! coordination. Validation is the only operation that can report a failure,
//! and it does so as a value rather than an error; the classifier and the
//! sentiment scorer accept any string and simply score garbage low.
//!
//! # Example
//!
//! ```
//! use rasid_dialect_core::{classify_dialect, normalize, validate_detailed, DialectLabel};
//!
//! let text = "شو الاخبار اليوم";
//!
//! let validation = validate_detailed(text);
//! assert!(validation.is_valid);
//!
//! let normalized = normalize(text);
//! assert_eq!(normalized, text);
//!
//! let classification = classify_dialect(text);
//! assert_eq!(classification.label, DialectLabel::Jordanian);
//! ```

pub mod classify;
pub mod lexicon;
pub mod normalize;
pub mod sentiment;
pub mod validate;

pub use classify::{classify_dialect, DialectClassification, DialectLabel, DIALECT_THRESHOLD};
pub use lexicon::{dialect_patterns, JORDANIAN_LEXICON, NEGATIVE_LEXICON, POSITIVE_LEXICON};
pub use normalize::normalize;
pub use sentiment::{score_sentiment, SentimentLabel, SentimentScore};
pub use validate::{is_arabic_char, validate, validate_detailed, ValidationError, ValidationResult};
