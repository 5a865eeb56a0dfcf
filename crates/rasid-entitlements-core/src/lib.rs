// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subscription entitlements for Rasid.
//!
//! This crate decides whether a subscription tier unlocks a feature. It is
//! consulted synchronously before rendering a gated UI region or executing
//! a gated action; denial falls back to an upgrade prompt built from
//! [`upgrade_target`].
//!
//! Evaluation is fail-closed: an unknown feature key is never granted, and
//! a missing or unrecognized tier degrades to [`SubscriptionTier::Free`].
//! Entitlement is monotonic by construction: the table maps each feature
//! to the minimum tier that unlocks it, so every higher tier's feature set
//! strictly includes the lower tiers'.
//!
//! # Example
//!
//! ```
//! use rasid_entitlements_core::{can_access_feature, upgrade_target, SubscriptionTier};
//!
//! assert!(!can_access_feature(SubscriptionTier::Free, "advanced_analytics"));
//! assert!(can_access_feature(SubscriptionTier::Enterprise, "advanced_analytics"));
//!
//! // Denied? Tell the user which plan unlocks it.
//! assert_eq!(
//! 	upgrade_target("advanced_analytics"),
//! 	Some(SubscriptionTier::Enterprise),
//! );
//! ```

pub mod catalog;
pub mod evaluate;
pub mod tier;

pub use catalog::FEATURE_CATALOG;
pub use evaluate::{can_access_feature, features_for, upgrade_target};
pub use tier::{SubscriptionTier, TierParseError};
