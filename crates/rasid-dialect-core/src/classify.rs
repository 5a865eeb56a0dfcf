// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Jordanian dialect classification.

use serde::{Deserialize, Serialize};

use crate::lexicon::{dialect_patterns, JORDANIAN_LEXICON};

/// Confidence above which text is labelled Jordanian.
pub const DIALECT_THRESHOLD: f64 = 0.15;

/// Binary dialect label.
///
/// The serialized forms are `"Jordanian"` and `"Non-Jordanian"` exactly;
/// downstream consumers match on these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialectLabel {
	Jordanian,
	#[serde(rename = "Non-Jordanian")]
	NonJordanian,
}

/// A dialect label with its supporting score.
///
/// `confidence` is `score / total_checks` where `total_checks` is the
/// static table size, not the number of matches. It is a heuristic
/// strength signal, not a probability: marker-dense text can push it past
/// 1.0. Only the ordering against [`DIALECT_THRESHOLD`] is calibrated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialectClassification {
	pub label: DialectLabel,
	pub confidence: f64,
	pub score: usize,
	pub total_checks: usize,
}

/// Classifies text as Jordanian or non-Jordanian dialect.
///
/// Scoring:
/// 1. Lower-case the text (a no-op for Arabic script, meaningful for
///    mixed-script input).
/// 2. Count non-overlapping occurrences of every lexicon term, each term
///    scanned independently, one point per occurrence.
/// 3. Count all pattern matches across the pattern table, global
///    semantics, so one pattern can score several times.
/// 4. `confidence = (lexicon hits + pattern hits) / table size`.
///
/// Total function: empty or non-Arabic input scores 0 and labels
/// non-Jordanian. Validation is the caller's job if bad input should be
/// rejected instead.
///
/// # Example
///
/// ```
/// use rasid_dialect_core::{classify_dialect, DialectLabel};
///
/// let classification = classify_dialect("شو الاخبار اليوم");
/// assert_eq!(classification.label, DialectLabel::Jordanian);
/// assert!(classification.confidence > 0.15);
/// ```
pub fn classify_dialect(text: &str) -> DialectClassification {
	let text = text.to_lowercase();

	let lexicon_hits: usize = JORDANIAN_LEXICON
		.iter()
		.map(|term| text.matches(term).count())
		.sum();

	let pattern_hits: usize = dialect_patterns()
		.iter()
		.map(|pattern| pattern.find_iter(&text).count())
		.sum();

	let score = lexicon_hits + pattern_hits;
	let total_checks = JORDANIAN_LEXICON.len() + dialect_patterns().len();
	let confidence = score as f64 / total_checks.max(1) as f64;

	let label = if confidence > DIALECT_THRESHOLD {
		DialectLabel::Jordanian
	} else {
		DialectLabel::NonJordanian
	};

	DialectClassification {
		label,
		confidence,
		score,
		total_checks,
	}
}
