//! Calculation logic for the Paycheck Engine.
//!
//! This module contains the rules that turn a day's punches into pay:
//! worked-minute parsing, break deduction, the regular/overtime split,
//! night overtime, daily pay, and the schedule-wide paycheck total.

mod break_deduction;
mod daily_pay;
mod night_overtime;
mod overtime_hours;
mod paycheck;
mod regular_hours;
mod worked_minutes;

pub use break_deduction::{
    BREAK_DURATION_MINUTES, BreakDeductionResult, PER_SHIFT_BREAK_INTERVAL_MINUTES, break_count,
    calculate_break_deduction,
};
pub use daily_pay::{DailyPayResult, calculate_daily_pay};
pub use night_overtime::{
    NIGHT_WINDOW_END_HOUR, NIGHT_WINDOW_START_HOUR, NightOvertimeResult, calculate_night_overtime,
    is_night_shift, night_window_overlap_minutes,
};
pub use overtime_hours::{OvertimeHoursResult, calculate_overtime_minutes};
pub use paycheck::{ENGINE_VERSION, LEGACY_RESCALE_DIVISOR, PaycheckCalculator};
pub use regular_hours::{RegularHoursResult, calculate_regular_minutes};
pub use worked_minutes::{
    WorkedMinutesResult, calculate_minutes_worked, elapsed_minutes, minutes_between,
};
