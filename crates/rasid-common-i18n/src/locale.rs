// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales and text direction.

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Ltr,
	Rtl,
}

/// Metadata for a supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub code: &'static str,
	pub name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
}

/// The locales Rasid ships with.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
];

/// Fallback locale when nothing else resolves.
pub const DEFAULT_LOCALE: &str = "en";

/// Returns true if the locale code is supported.
pub fn is_supported(locale: &str) -> bool {
	LOCALES.iter().any(|info| info.code == locale)
}

/// Returns metadata for a supported locale.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|info| info.code == locale)
}

/// Returns true if the locale renders right-to-left.
///
/// Unknown locales default to LTR.
pub fn is_rtl(locale: &str) -> bool {
	locale_info(locale).map(|info| info.direction == Direction::Rtl).unwrap_or(false)
}

/// All supported locale codes.
pub fn available_locales() -> impl Iterator<Item = &'static str> {
	LOCALES.iter().map(|info| info.code)
}
