// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Arabic text normalization.
//!
//! Raw social-media and news text arrives with inconsistent orthography:
//! optional diacritics, several alif spellings, and final-form letters that
//! vary by author. Normalization folds these to one canonical form so the
//! downstream lexicon matching sees a single spelling per word.

/// Normalizes raw Arabic text to its canonical matching form.
///
/// - Strips diacritics (short vowels, tanwin, shadda, sukun), the
///   superscript alif, and the Quranic annotation marks.
/// - Folds alif-with-hamza variants (أ, إ, آ) to bare alif (ا).
/// - Folds taa marbouta (ة) to haa (ه).
/// - Folds alif maksura (ى) to yaa (ي).
/// - Collapses whitespace runs to a single space and trims the ends.
///
/// Total over all inputs, and idempotent: `normalize(normalize(t)) ==
/// normalize(t)`.
///
/// # Example
///
/// ```
/// use rasid_dialect_core::normalize;
///
/// assert_eq!(normalize("مَدْرَسَة"), "مدرسه");
/// assert_eq!(normalize("  أهلاً   وسهلاً  "), "اهلا وسهلا");
/// ```
pub fn normalize(text: &str) -> String {
	let folded: String = text
		.chars()
		.filter(|c| !is_diacritic(*c))
		.map(fold_letter)
		.collect();

	folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Combining marks removed during normalization: tanwin and short vowels
/// (U+064B..U+0652), superscript alif (U+0670), and the Quranic small
/// marks (U+06D6..U+06ED).
fn is_diacritic(c: char) -> bool {
	matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}')
}

fn fold_letter(c: char) -> char {
	match c {
		// Alif variants: madda, hamza above, hamza below
		'\u{0622}' | '\u{0623}' | '\u{0625}' => '\u{0627}',
		// Taa marbouta -> haa
		'\u{0629}' => '\u{0647}',
		// Alif maksura -> yaa
		'\u{0649}' => '\u{064A}',
		_ => c,
	}
}
