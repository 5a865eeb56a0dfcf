// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Analysis record assembly for Rasid.
//!
//! This crate is the boundary between the pure text pipeline in
//! `rasid-dialect-core` and the HTTP-invoked analysis function that feeds
//! the persistence layer. [`analyze_text`] runs validation, normalization,
//! dialect classification, and sentiment scoring over one piece of raw
//! text and assembles the JSON-serializable [`TextAnalysis`] record that
//! gets merged into the caller's larger analysis document.
//!
//! The record is always produced: invalid input yields `is_valid = false`
//! with a localized message, alongside whatever the (total) classifiers
//! made of the raw text. Rejecting such records is the caller's decision.
//!
//! # Example
//!
//! ```
//! use rasid_analysis_core::analyze_text;
//! use rasid_dialect_core::DialectLabel;
//!
//! let record = analyze_text("شو الاخبار اليوم", Some("en"));
//! assert!(record.is_valid);
//! assert_eq!(record.dialect, DialectLabel::Jordanian);
//!
//! let json = serde_json::to_value(&record).unwrap();
//! assert_eq!(json["dialect"], "Jordanian");
//! ```

pub mod analyze;
pub mod record;

pub use analyze::analyze_text;
pub use record::{AnalysisId, TextAnalysis};
