// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The bilingual message catalog.
//!
//! A static table rather than gettext: two locales and a small key set
//! don't justify catalog files and a build step. Lookup falls back to
//! English for unknown locales and echoes the key for unknown keys, so
//! a missing translation renders as its key instead of failing.

struct Entry {
	key: &'static str,
	en: &'static str,
	ar: &'static str,
}

const CATALOG: &[Entry] = &[
	Entry {
		key: "analysis.validation.too_short",
		en: "Text is empty or too short to analyze",
		ar: "النص فارغ أو قصير جداً للتحليل",
	},
	Entry {
		key: "analysis.validation.no_arabic",
		en: "Text contains no Arabic characters",
		ar: "النص لا يحتوي على أحرف عربية",
	},
	Entry {
		key: "analysis.dialect.jordanian",
		en: "Jordanian dialect",
		ar: "اللهجة الأردنية",
	},
	Entry {
		key: "analysis.dialect.non_jordanian",
		en: "Non-Jordanian",
		ar: "غير أردنية",
	},
	Entry {
		key: "entitlements.tier.free",
		en: "Free",
		ar: "مجاني",
	},
	Entry {
		key: "entitlements.tier.basic",
		en: "Basic",
		ar: "أساسي",
	},
	Entry {
		key: "entitlements.tier.premium",
		en: "Premium",
		ar: "مميز",
	},
	Entry {
		key: "entitlements.tier.enterprise",
		en: "Enterprise",
		ar: "مؤسسات",
	},
	Entry {
		key: "entitlements.upgrade.prompt",
		en: "Upgrade to {tier} to unlock {feature}",
		ar: "قم بالترقية إلى {tier} لفتح ميزة {feature}",
	},
];

fn lookup(key: &str) -> Option<&'static Entry> {
	CATALOG.iter().find(|entry| entry.key == key)
}

/// Translates a message key for the given locale.
///
/// Unknown locales fall back to English; an unknown key is echoed back so
/// a missing translation is visible rather than fatal.
pub fn t(locale: &str, key: &str) -> String {
	match lookup(key) {
		Some(entry) => match locale {
			"ar" => entry.ar.to_string(),
			_ => entry.en.to_string(),
		},
		None => key.to_string(),
	}
}

/// Translates a message key and substitutes `{name}` placeholders.
///
/// # Example
///
/// ```
/// use rasid_common_i18n::t_fmt;
///
/// let prompt = t_fmt("en", "entitlements.upgrade.prompt", &[
/// 	("tier", "premium"),
/// 	("feature", "api_access"),
/// ]);
/// assert_eq!(prompt, "Upgrade to premium to unlock api_access");
/// ```
pub fn t_fmt(locale: &str, key: &str, vars: &[(&str, &str)]) -> String {
	let mut message = t(locale, key);
	for (name, value) in vars {
		message = message.replace(&format!("{{{name}}}"), value);
	}
	message
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_translation_per_locale() {
		assert_eq!(
			t("en", "analysis.validation.no_arabic"),
			"Text contains no Arabic characters"
		);
		assert_eq!(
			t("ar", "analysis.validation.no_arabic"),
			"النص لا يحتوي على أحرف عربية"
		);
	}

	#[test]
	fn test_unknown_locale_falls_back_to_english() {
		assert_eq!(
			t("fr", "analysis.validation.too_short"),
			t("en", "analysis.validation.too_short")
		);
	}

	#[test]
	fn test_unknown_key_echoes_key() {
		assert_eq!(t("en", "no.such.key"), "no.such.key");
		assert_eq!(t("ar", "no.such.key"), "no.such.key");
	}

	#[test]
	fn test_t_fmt_substitutes_variables() {
		let prompt = t_fmt(
			"en",
			"entitlements.upgrade.prompt",
			&[("tier", "enterprise"), ("feature", "advanced_analytics")],
		);
		assert_eq!(prompt, "Upgrade to enterprise to unlock advanced_analytics");
	}

	#[test]
	fn test_t_fmt_arabic_substitution() {
		let prompt = t_fmt(
			"ar",
			"entitlements.upgrade.prompt",
			&[("tier", "مميز"), ("feature", "api_access")],
		);
		assert!(prompt.contains("مميز"));
		assert!(prompt.contains("api_access"));
		assert!(!prompt.contains("{tier}"));
	}

	#[test]
	fn test_t_fmt_without_vars_is_t() {
		assert_eq!(
			t_fmt("en", "analysis.dialect.jordanian", &[]),
			t("en", "analysis.dialect.jordanian")
		);
	}

	#[test]
	fn test_every_key_has_both_translations() {
		for entry in CATALOG {
			assert!(!entry.en.is_empty(), "missing en for {}", entry.key);
			assert!(!entry.ar.is_empty(), "missing ar for {}", entry.key);
		}
	}

	#[test]
	fn test_catalog_keys_are_unique() {
		for (i, entry) in CATALOG.iter().enumerate() {
			assert!(
				!CATALOG[i + 1..].iter().any(|other| other.key == entry.key),
				"duplicate catalog key: {}",
				entry.key
			);
		}
	}

	#[test]
	fn test_placeholders_match_across_locales() {
		// Every {placeholder} in the English text must appear in the
		// Arabic text as well, otherwise t_fmt leaves residue in one
		// locale only.
		for entry in CATALOG {
			for part in entry.en.split('{').skip(1) {
				if let Some(name) = part.split('}').next() {
					assert!(
						entry.ar.contains(&format!("{{{name}}}")),
						"placeholder {{{name}}} missing from ar translation of {}",
						entry.key
					);
				}
			}
		}
	}
}
