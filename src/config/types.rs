//! Configuration types for pay policies.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML policy file.

use serde::Deserialize;

use crate::models::PayPolicy;

/// A named pay policy as stored in a policy file.
///
/// ```yaml
/// name: Nurse
/// description: Default nursing rates
/// policy:
///   hourly_rate: "1"
///   regular_hours_per_day: 9
///   weekly_overtime_threshold: 50
///   overtime_rate_1: "1.2"
///   overtime_rate_2: "1.35"
///   overnight_overtime_rate: "1.25"
///   holiday_overtime_rate: "1.30"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Human-readable name of the policy.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: String,
    /// The pay parameters.
    pub policy: PayPolicy,
}
