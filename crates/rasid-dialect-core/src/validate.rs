// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Input validation for the analysis pipeline.
//!
//! Validation reports failure as a value, not an `Err`: callers check
//! [`ValidationResult::is_valid`] before classifying or persisting. The
//! failure kinds are typed so the boundary layer can localize the
//! user-facing message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum trimmed length (in characters) for analyzable text.
pub const MIN_TEXT_CHARS: usize = 3;

/// Why a piece of text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
	#[error("text is empty or too short")]
	TooShort,

	#[error("text contains no Arabic characters")]
	NoArabic,
}

/// Outcome of validating raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
	pub is_valid: bool,
	pub error: Option<ValidationError>,
}

impl ValidationResult {
	fn valid() -> Self {
		Self {
			is_valid: true,
			error: None,
		}
	}

	fn invalid(error: ValidationError) -> Self {
		Self {
			is_valid: false,
			error: Some(error),
		}
	}
}

/// Returns true for characters in the Arabic Unicode block (U+0600..U+06FF).
pub fn is_arabic_char(c: char) -> bool {
	('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Validates raw text for analysis, reporting the failure kind.
///
/// Text is rejected when its trimmed length is under [`MIN_TEXT_CHARS`]
/// characters, or when no character falls in the Arabic Unicode block.
/// Normalization maps Arabic characters to Arabic characters, so the
/// Arabic-presence check gives the same outcome on raw and normalized text.
///
/// # Example
///
/// ```
/// use rasid_dialect_core::{validate_detailed, ValidationError};
///
/// assert!(validate_detailed("شو الاخبار").is_valid);
/// assert_eq!(
/// 	validate_detailed("Hello world").error,
/// 	Some(ValidationError::NoArabic),
/// );
/// ```
pub fn validate_detailed(text: &str) -> ValidationResult {
	let trimmed = text.trim();

	if trimmed.chars().count() < MIN_TEXT_CHARS {
		return ValidationResult::invalid(ValidationError::TooShort);
	}

	if !trimmed.chars().any(is_arabic_char) {
		return ValidationResult::invalid(ValidationError::NoArabic);
	}

	ValidationResult::valid()
}

/// Boolean projection of [`validate_detailed`].
pub fn validate(text: &str) -> bool {
	validate_detailed(text).is_valid
}
