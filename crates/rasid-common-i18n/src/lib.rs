// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Rasid.
//!
//! Rasid ships bilingual: English (LTR) and Arabic (RTL). This crate holds
//! the server-side message catalog and the locale plumbing around it.
//!
//! # String Naming Convention
//!
//! All translatable strings use a hierarchical dot-notation key format:
//!
//! - `analysis.` prefix for the text-analysis pipeline (validation
//!   messages, dialect names)
//! - `entitlements.` prefix for subscription gating (tier names, upgrade
//!   prompts)
//!
//! Example: `analysis.validation.too_short`
//!
//! # Example
//!
//! ```
//! use rasid_common_i18n::{is_rtl, resolve_locale, t, t_fmt};
//!
//! // Simple translation
//! let message = t("ar", "analysis.validation.too_short");
//!
//! // Translation with variables
//! let prompt = t_fmt("en", "entitlements.upgrade.prompt", &[
//! 	("tier", "premium"),
//! 	("feature", "api_access"),
//! ]);
//!
//! // Check for RTL language
//! assert!(is_rtl("ar"));
//!
//! // Resolve user's effective locale
//! assert_eq!(resolve_locale(Some("ar"), "en"), "ar");
//! ```

mod catalog;
mod locale;
mod resolve;

pub use catalog::{t, t_fmt};
pub use locale::{available_locales, is_rtl, is_supported, locale_info, Direction, LocaleInfo};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
