// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subscription tier modeling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a tier string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown subscription tier: {0}")]
pub struct TierParseError(pub String);

/// Subscription tier, ordered by increasing entitlement.
///
/// The derived `Ord` follows declaration order, which the entitlement
/// table relies on: `Free < Basic < Premium < Enterprise`.
///
/// Serialized in lowercase to match the subscription records
/// (`"free"`, `"basic"`, `"premium"`, `"enterprise"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
	Free,
	Basic,
	Premium,
	Enterprise,
}

impl SubscriptionTier {
	/// All tiers, lowest entitlement first.
	pub const ALL: &'static [SubscriptionTier] = &[
		SubscriptionTier::Free,
		SubscriptionTier::Basic,
		SubscriptionTier::Premium,
		SubscriptionTier::Enterprise,
	];

	/// Fail-closed parse: `None`, empty, or unrecognized input degrades to
	/// [`SubscriptionTier::Free`]. Use the strict [`std::str::FromStr`]
	/// impl when an unknown tier should surface as an error instead.
	pub fn from_opt(tier: Option<&str>) -> Self {
		tier.and_then(|s| s.parse().ok()).unwrap_or(SubscriptionTier::Free)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			SubscriptionTier::Free => "free",
			SubscriptionTier::Basic => "basic",
			SubscriptionTier::Premium => "premium",
			SubscriptionTier::Enterprise => "enterprise",
		}
	}
}

impl std::fmt::Display for SubscriptionTier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl std::str::FromStr for SubscriptionTier {
	type Err = TierParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"free" => Ok(SubscriptionTier::Free),
			"basic" => Ok(SubscriptionTier::Basic),
			"premium" => Ok(SubscriptionTier::Premium),
			"enterprise" => Ok(SubscriptionTier::Enterprise),
			_ => Err(TierParseError(s.to_string())),
		}
	}
}
