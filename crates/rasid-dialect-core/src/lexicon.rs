// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static marker tables for dialect and sentiment scoring.
//!
//! The tables are configuration data, kept apart from the scoring
//! algorithms so an alternate dialect set can be swapped in without
//! touching the arithmetic. The classifier's confidence denominator is
//! `JORDANIAN_LEXICON.len() + dialect_patterns().len()`; growing either
//! table shifts every confidence ratio, so additions must be retuned
//! against the classification threshold.

use once_cell::sync::Lazy;
use regex::Regex;

/// Curated Jordanian dialect markers, matched by substring containment.
///
/// Surface (un-normalized) forms: the classifier runs on raw text.
pub const JORDANIAN_LEXICON: &[&str] = &[
	"شو",   // what
	"هسا",  // now
	"زلمة", // man
	"بدي",  // I want
	"هاد",  // this (m.)
	"هاي",  // this (f.)
	"منيح", // good
	"كيفك", // how are you
];

/// Regex sources grouping related markers. Matched with global semantics:
/// one pattern can contribute several hits in the same text.
const DIALECT_PATTERN_SOURCES: &[&str] = &[
	// Question words
	"(شو|ليش|وين|امتى|قديش)",
	// Vocative forms
	"يا\\s+(زلمة|رجال|اخوي|عمي|حبيبي)",
	// Present-tense b- prefix verbs
	"\\bب(دي|حكي|روح|شوف|صير|قدر)",
	// Intensifiers
	"(كثير|عنجد|بالمرة)",
];

/// Compiled dialect patterns, built once on first use.
pub fn dialect_patterns() -> &'static [Regex] {
	static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
		DIALECT_PATTERN_SOURCES
			.iter()
			.map(|source| Regex::new(source).expect("static dialect pattern must compile"))
			.collect()
	});

	&PATTERNS
}

/// Positive sentiment markers, in normalized form.
pub const POSITIVE_LEXICON: &[&str] = &[
	"ممتاز", "رائع", "جميل", "حلو", "سعيد", "نجاح", "فرح", "احسن", "تقدم", "انجاز",
];

/// Negative sentiment markers, in normalized form.
pub const NEGATIVE_LEXICON: &[&str] = &[
	"سيئ", "فشل", "حزين", "مشكله", "غضب", "كارثه", "ضعيف", "خطر", "ازمه", "تراجع",
];
