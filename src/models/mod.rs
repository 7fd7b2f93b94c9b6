//! Core data models for the Paycheck Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day;
mod pay_policy;
mod paycheck_result;
mod schedule;

pub use day::{Day, PUNCH_FORMAT};
pub use pay_policy::{BreakRule, NightOvertimeRule, PayPolicy};
pub use paycheck_result::{AuditStep, AuditTrace, DailyPayLine, PayTotals, PaycheckResult};
pub use schedule::Schedule;
