// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The analysis entry point.

use rasid_common_i18n::{resolve_locale, t, DEFAULT_LOCALE};
use rasid_dialect_core::{
	classify_dialect, normalize, score_sentiment, validate_detailed, ValidationError,
};
use tracing::debug;

use crate::record::{AnalysisId, TextAnalysis};

/// Analyzes one piece of raw article or post text.
///
/// Runs validation, normalization, dialect classification, and sentiment
/// scoring, then assembles a [`TextAnalysis`] record.
/// Never fails: classification is total, and a validation failure
/// is recorded on the result (with a message localized for the resolved
/// locale) rather than returned as an error.
///
/// `locale` is the caller's stored preference; `None` resolves to the
/// platform default.
pub fn analyze_text(text: &str, locale: Option<&str>) -> TextAnalysis {
	let locale = resolve_locale(locale, DEFAULT_LOCALE);

	let validation = validate_detailed(text);
	let normalized = normalize(text);
	// The classifier contract takes the raw text; the lexicon is written
	// in surface forms. Normalized text rides along for downstream
	// matching, it is not the classifier input.
	let classification = classify_dialect(text);
	let sentiment = score_sentiment(text);

	let record = TextAnalysis {
		id: AnalysisId::new(),
		text: text.to_string(),
		normalized_text: normalized,
		is_valid: validation.is_valid,
		validation_message: validation.error.map(|error| t(locale, message_key(error))),
		dialect: classification.label,
		dialect_confidence: classification.confidence,
		sentiment: sentiment.label,
		sentiment_score: sentiment.score,
		locale: locale.to_string(),
		analyzed_at: chrono::Utc::now(),
	};

	debug!(
		analysis_id = %record.id,
		text_chars = text.chars().count(),
		is_valid = record.is_valid,
		dialect = ?record.dialect,
		confidence = record.dialect_confidence,
		sentiment = ?record.sentiment,
		"analyzed text"
	);

	record
}

fn message_key(error: ValidationError) -> &'static str {
	match error {
		ValidationError::TooShort => "analysis.validation.too_short",
		ValidationError::NoArabic => "analysis.validation.no_arabic",
	}
}
