//! Paycheck Engine
//!
//! This crate converts a schedule of daily time-in/time-out punches into a
//! paycheck total under a configurable pay policy: a daily regular-hour cap,
//! an overtime threshold, an overtime rate, break deductions and a night-shift
//! overtime rule.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
