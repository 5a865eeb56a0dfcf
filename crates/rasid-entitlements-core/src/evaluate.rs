// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Access evaluation over the entitlement table.

use crate::catalog::{minimum_tier, FEATURE_CATALOG};
use crate::tier::SubscriptionTier;

/// Decides whether `tier` unlocks `feature`.
///
/// Fail-closed: unknown feature keys are never granted. Evaluated
/// synchronously on every check; no side effects, no persistence.
///
/// # Example
///
/// ```
/// use rasid_entitlements_core::{can_access_feature, SubscriptionTier};
///
/// assert!(can_access_feature(SubscriptionTier::Basic, "keyword_alerts"));
/// assert!(!can_access_feature(SubscriptionTier::Basic, "api_access"));
/// assert!(!can_access_feature(SubscriptionTier::Enterprise, "nonexistent_feature"));
/// ```
pub fn can_access_feature(tier: SubscriptionTier, feature: &str) -> bool {
	match minimum_tier(feature) {
		Some(minimum) => tier >= minimum,
		None => false,
	}
}

/// All feature keys unlocked at `tier`, in catalog order.
///
/// Higher tiers strictly include every lower tier's set.
pub fn features_for(tier: SubscriptionTier) -> Vec<&'static str> {
	FEATURE_CATALOG
		.iter()
		.filter(|(_, minimum)| tier >= *minimum)
		.map(|(key, _)| *key)
		.collect()
}

/// The minimum tier that unlocks `feature`, for upgrade prompts on a
/// denied check. `None` for unknown features (nothing to upsell).
pub fn upgrade_target(feature: &str) -> Option<SubscriptionTier> {
	minimum_tier(feature)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_free_tier_scope() {
		assert!(can_access_feature(SubscriptionTier::Free, "basic_search"));
		assert!(can_access_feature(SubscriptionTier::Free, "daily_digest"));
		assert!(!can_access_feature(SubscriptionTier::Free, "sentiment_analysis"));
		assert!(!can_access_feature(SubscriptionTier::Free, "advanced_analytics"));
	}

	#[test]
	fn test_enterprise_unlocks_everything() {
		for (feature, _) in FEATURE_CATALOG {
			assert!(can_access_feature(SubscriptionTier::Enterprise, feature));
		}
	}

	#[test]
	fn test_unknown_feature_denied_for_every_tier() {
		for tier in SubscriptionTier::ALL {
			assert!(!can_access_feature(*tier, "nonexistent_feature"));
			assert!(!can_access_feature(*tier, ""));
		}
	}

	#[test]
	fn test_features_for_is_cumulative() {
		let free = features_for(SubscriptionTier::Free);
		let basic = features_for(SubscriptionTier::Basic);
		let premium = features_for(SubscriptionTier::Premium);
		let enterprise = features_for(SubscriptionTier::Enterprise);

		assert!(free.len() < basic.len());
		assert!(basic.len() < premium.len());
		assert!(premium.len() < enterprise.len());
		assert_eq!(enterprise.len(), FEATURE_CATALOG.len());
	}

	#[test]
	fn test_upgrade_target() {
		assert_eq!(upgrade_target("api_access"), Some(SubscriptionTier::Premium));
		assert_eq!(
			upgrade_target("advanced_analytics"),
			Some(SubscriptionTier::Enterprise)
		);
		assert_eq!(upgrade_target("basic_search"), Some(SubscriptionTier::Free));
		assert_eq!(upgrade_target("nonexistent_feature"), None);
	}

	#[test]
	fn test_upgrade_target_is_least_granting_tier() {
		for (feature, _) in FEATURE_CATALOG {
			let target = upgrade_target(feature).expect("catalog feature has a tier");
			assert!(can_access_feature(target, feature));
			for tier in SubscriptionTier::ALL.iter().filter(|t| **t < target) {
				assert!(!can_access_feature(*tier, feature));
			}
		}
	}

	proptest! {
		/// A feature granted at some tier stays granted at every higher
		/// tier.
		#[test]
		fn access_is_monotonic(feature_idx in 0usize..11, a in 0usize..4, b in 0usize..4) {
			let (feature, _) = FEATURE_CATALOG[feature_idx];
			let lower = SubscriptionTier::ALL[a.min(b)];
			let higher = SubscriptionTier::ALL[a.max(b)];
			if can_access_feature(lower, feature) {
				prop_assert!(can_access_feature(higher, feature));
			}
		}

		/// features_for is consistent with can_access_feature.
		#[test]
		fn features_for_matches_point_checks(tier_idx in 0usize..4) {
			let tier = SubscriptionTier::ALL[tier_idx];
			let unlocked = features_for(tier);
			for (feature, _) in FEATURE_CATALOG {
				prop_assert_eq!(unlocked.contains(feature), can_access_feature(tier, feature));
			}
		}

		/// Unknown feature keys are denied regardless of tier.
		#[test]
		fn unknown_features_fail_closed(tier_idx in 0usize..4, key in "[a-z_]{1,20}") {
			let tier = SubscriptionTier::ALL[tier_idx];
			if !FEATURE_CATALOG.iter().any(|(k, _)| *k == key) {
				prop_assert!(!can_access_feature(tier, &key));
			}
		}

		/// Subset relation between consecutive tiers.
		#[test]
		fn consecutive_tiers_are_supersets(idx in 0usize..3) {
			let lower = features_for(SubscriptionTier::ALL[idx]);
			let higher = features_for(SubscriptionTier::ALL[idx + 1]);
			for feature in &lower {
				prop_assert!(higher.contains(feature));
			}
		}
	}
}
