//! HTTP API module for the Paycheck Engine.
//!
//! This module provides the REST API endpoint for calculating a paycheck
//! from a schedule of punches.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DayRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
