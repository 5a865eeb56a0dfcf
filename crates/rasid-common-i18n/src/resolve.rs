// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{is_supported, DEFAULT_LOCALE};

/// Resolve the effective locale from user preference and server default.
///
/// Resolution order (highest to lowest priority):
/// 1. User's stored locale preference (if valid)
/// 2. Server default locale (if valid)
/// 3. Fallback to English ("en")
///
/// # Example
///
/// ```
/// use rasid_common_i18n::resolve_locale;
///
/// // User preference takes priority
/// assert_eq!(resolve_locale(Some("ar"), "en"), "ar");
///
/// // Falls back to the server default if the user has no preference
/// assert_eq!(resolve_locale(None, "ar"), "ar");
///
/// // Falls back to English if both are invalid
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), "en");
/// ```
pub fn resolve_locale(user_locale: Option<&str>, server_default: &str) -> &'static str {
	if let Some(locale) = user_locale {
		if is_supported(locale) {
			return locale_to_static(locale);
		}
	}

	if is_supported(server_default) {
		return locale_to_static(server_default);
	}

	DEFAULT_LOCALE
}

fn locale_to_static(locale: &str) -> &'static str {
	match locale {
		"en" => "en",
		"ar" => "ar",
		_ => DEFAULT_LOCALE,
	}
}
