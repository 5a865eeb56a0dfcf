// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The feature entitlement table.
//!
//! Each entry maps a feature key to the minimum tier that unlocks it.
//! Keying the table this direction (feature -> minimum tier, rather than
//! tier -> feature set) makes monotonic entitlement structural: a tier
//! unlocks a feature iff `tier >= minimum`, so a higher tier can never
//! lose a feature a lower tier has.

use crate::tier::SubscriptionTier;

/// Feature key -> minimum tier that unlocks it.
///
/// Keys are the stable identifiers used by UI gating call sites and the
/// upgrade prompts; renaming one is a breaking change for stored
/// subscription metadata.
pub const FEATURE_CATALOG: &[(&str, SubscriptionTier)] = &[
	// Free
	("basic_search", SubscriptionTier::Free),
	("daily_digest", SubscriptionTier::Free),
	// Basic
	("sentiment_analysis", SubscriptionTier::Basic),
	("keyword_alerts", SubscriptionTier::Basic),
	("export_reports", SubscriptionTier::Basic),
	// Premium
	("dialect_detection", SubscriptionTier::Premium),
	("competitor_tracking", SubscriptionTier::Premium),
	("api_access", SubscriptionTier::Premium),
	// Enterprise
	("advanced_analytics", SubscriptionTier::Enterprise),
	("custom_dashboards", SubscriptionTier::Enterprise),
	("priority_support", SubscriptionTier::Enterprise),
];

/// Looks up the minimum tier for a feature key. Unknown keys yield `None`.
pub(crate) fn minimum_tier(feature: &str) -> Option<SubscriptionTier> {
	FEATURE_CATALOG
		.iter()
		.find(|(key, _)| *key == feature)
		.map(|(_, tier)| *tier)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_keys_are_unique() {
		for (i, (key, _)) in FEATURE_CATALOG.iter().enumerate() {
			assert!(
				!FEATURE_CATALOG[i + 1..].iter().any(|(other, _)| other == key),
				"duplicate feature key: {key}"
			);
		}
	}

	#[test]
	fn test_every_tier_gates_something() {
		for tier in SubscriptionTier::ALL {
			assert!(
				FEATURE_CATALOG.iter().any(|(_, minimum)| minimum == tier),
				"no feature gated at {tier}"
			);
		}
	}

	#[test]
	fn test_advanced_analytics_is_enterprise_gated() {
		assert_eq!(
			minimum_tier("advanced_analytics"),
			Some(SubscriptionTier::Enterprise)
		);
	}

	#[test]
	fn test_unknown_feature_has_no_tier() {
		assert_eq!(minimum_tier("nonexistent_feature"), None);
	}
}
