//! Application state for the Paycheck Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PaycheckCalculator;
use crate::models::PayPolicy;

/// Shared application state.
///
/// Holds the calculator for the configured policy.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<PaycheckCalculator>,
}

impl AppState {
    /// Creates a new application state pricing with the given policy.
    pub fn new(policy: PayPolicy) -> Self {
        Self {
            calculator: Arc::new(PaycheckCalculator::new(policy)),
        }
    }

    /// Returns the calculator for the configured policy.
    pub fn calculator(&self) -> &PaycheckCalculator {
        &self.calculator
    }
}
