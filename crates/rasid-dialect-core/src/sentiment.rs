// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lexicon-based sentiment scoring.
//!
//! A lightweight local signal used alongside the external NLP providers:
//! counts positive and negative marker hits on normalized text. The
//! lexicons live in [`crate::lexicon`] in normalized form, so input is
//! normalized here before scanning.

use serde::{Deserialize, Serialize};

use crate::lexicon::{NEGATIVE_LEXICON, POSITIVE_LEXICON};
use crate::normalize::normalize;

/// Ternary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
	Positive,
	Negative,
	Neutral,
}

/// A sentiment label with its supporting counts.
///
/// `score` is `(positive - negative) / (positive + negative)`, in
/// `[-1, 1]`, and 0.0 when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
	pub label: SentimentLabel,
	pub score: f64,
	pub positive_hits: usize,
	pub negative_hits: usize,
}

/// Scores text sentiment from the positive/negative marker lexicons.
///
/// Total function: empty or marker-free text is neutral with score 0.0.
///
/// # Example
///
/// ```
/// use rasid_dialect_core::{score_sentiment, SentimentLabel};
///
/// assert_eq!(score_sentiment("خبر رائع ونجاح كبير").label, SentimentLabel::Positive);
/// assert_eq!(score_sentiment("الطقس اليوم").label, SentimentLabel::Neutral);
/// ```
pub fn score_sentiment(text: &str) -> SentimentScore {
	let normalized = normalize(text);

	let positive_hits: usize = POSITIVE_LEXICON
		.iter()
		.map(|term| normalized.matches(term).count())
		.sum();

	let negative_hits: usize = NEGATIVE_LEXICON
		.iter()
		.map(|term| normalized.matches(term).count())
		.sum();

	let total = positive_hits + negative_hits;
	let score = if total == 0 {
		0.0
	} else {
		(positive_hits as f64 - negative_hits as f64) / total as f64
	};

	let label = if positive_hits > negative_hits {
		SentimentLabel::Positive
	} else if negative_hits > positive_hits {
		SentimentLabel::Negative
	} else {
		SentimentLabel::Neutral
	};

	SentimentScore {
		label,
		score,
		positive_hits,
		negative_hits,
	}
}
