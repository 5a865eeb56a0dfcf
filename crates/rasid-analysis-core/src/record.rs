// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use rasid_dialect_core::{DialectLabel, SentimentLabel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an analysis record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub Uuid);

impl AnalysisId {
	pub fn new() -> Self {
		Self(Uuid::new_v4())
	}
}

impl Default for AnalysisId {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Display for AnalysisId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::str::FromStr for AnalysisId {
	type Err = uuid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(Uuid::parse_str(s)?))
	}
}

/// One analyzed piece of text, ready to merge into the caller's analysis
/// document.
///
/// `dialect` serializes as `"Jordanian"` or `"Non-Jordanian"` exactly;
/// existing consumers match on those strings. `validation_message` is
/// localized for the locale recorded in `locale` and present only when
/// `is_valid` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
	pub id: AnalysisId,
	pub text: String,
	pub normalized_text: String,
	pub is_valid: bool,
	pub validation_message: Option<String>,
	pub dialect: DialectLabel,
	pub dialect_confidence: f64,
	pub sentiment: SentimentLabel,
	pub sentiment_score: f64,
	pub locale: String,
	pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_analysis_id_roundtrip() {
		let id = AnalysisId::new();
		let parsed: AnalysisId = id.to_string().parse().unwrap();
		assert_eq!(parsed, id);
	}

	#[test]
	fn test_analysis_ids_are_unique() {
		assert_ne!(AnalysisId::new(), AnalysisId::new());
	}

	#[test]
	fn test_record_json_roundtrip() {
		let record = TextAnalysis {
			id: AnalysisId::new(),
			text: "شو الاخبار".to_string(),
			normalized_text: "شو الاخبار".to_string(),
			is_valid: true,
			validation_message: None,
			dialect: DialectLabel::Jordanian,
			dialect_confidence: 0.25,
			sentiment: SentimentLabel::Neutral,
			sentiment_score: 0.0,
			locale: "en".to_string(),
			analyzed_at: Utc::now(),
		};

		let json = serde_json::to_string(&record).unwrap();
		let parsed: TextAnalysis = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, record);
	}

	#[test]
	fn test_dialect_wire_strings() {
		let mut record = TextAnalysis {
			id: AnalysisId::new(),
			text: String::new(),
			normalized_text: String::new(),
			is_valid: false,
			validation_message: None,
			dialect: DialectLabel::Jordanian,
			dialect_confidence: 0.0,
			sentiment: SentimentLabel::Neutral,
			sentiment_score: 0.0,
			locale: "en".to_string(),
			analyzed_at: Utc::now(),
		};

		let json = serde_json::to_value(&record).unwrap();
		assert_eq!(json["dialect"], "Jordanian");

		record.dialect = DialectLabel::NonJordanian;
		let json = serde_json::to_value(&record).unwrap();
		assert_eq!(json["dialect"], "Non-Jordanian");
	}
}
