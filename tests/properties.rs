//! Property tests for the paycheck rules.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use paycheck_engine::calculation::{
    BREAK_DURATION_MINUTES, LEGACY_RESCALE_DIVISOR, PaycheckCalculator, break_count,
    calculate_daily_pay,
};
use paycheck_engine::models::{BreakRule, Day, NightOvertimeRule, PayPolicy, Schedule};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn nurse_policy() -> PayPolicy {
    PayPolicy {
        hourly_rate: dec("1"),
        regular_hours_per_day: 9,
        weekly_overtime_threshold: 50,
        overtime_rate_1: dec("1.2"),
        overtime_rate_2: dec("1.35"),
        overnight_overtime_rate: dec("1.25"),
        holiday_overtime_rate: dec("1.30"),
        break_rule: BreakRule::Legacy,
        night_overtime_rule: NightOvertimeRule::WholeShift,
    }
}

/// Formats minutes since midnight as a 12-hour clock token.
fn clock(minutes: u32) -> String {
    let hour = minutes / 60;
    let minute = minutes % 60;
    let meridiem = if hour < 12 { "am" } else { "pm" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, minute, meridiem)
}

fn day_strategy() -> impl Strategy<Value = Day> {
    (1u32..=28, 0u32..1440, 0u32..1440).prop_map(|(d, a, b)| {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Day::new(format!("{}-Aug-21", d), clock(start), clock(end))
    })
}

proptest! {
    #[test]
    fn legacy_break_is_monotonic(m in 0i64..5000, extra in 0i64..500) {
        prop_assert!(break_count(m, BreakRule::Legacy) <= break_count(m + extra, BreakRule::Legacy));
    }

    #[test]
    fn legacy_break_matches_closed_form(m in 1i64..5000) {
        let expected = BREAK_DURATION_MINUTES * ((m as f64) / 3.5).floor() as i64;
        prop_assert_eq!(break_count(m, BreakRule::Legacy) * BREAK_DURATION_MINUTES, expected);
    }

    #[test]
    fn night_rule_fires_only_inside_hours(start in 0u32..1440, len in 0u32..1440) {
        let end = (start + len).min(1439);
        let day = Day::new("2-Aug-21", clock(start), clock(end));
        let line = calculate_daily_pay(&day, &nurse_policy(), 1).unwrap().line;

        let fires = start / 60 >= 2 && end / 60 <= 5;
        if fires {
            prop_assert_eq!(line.night_overtime_minutes, line.elapsed_minutes);
        } else {
            prop_assert_eq!(line.night_overtime_minutes, 0);
        }
    }

    #[test]
    fn total_is_sum_over_divisor_and_order_free(days in prop::collection::vec(day_strategy(), 0..8)) {
        let calculator = PaycheckCalculator::new(nurse_policy());

        let forward = Schedule::new(days.clone());
        let mut reversed_days = days.clone();
        reversed_days.reverse();
        let reversed = Schedule::new(reversed_days);

        let gross: Decimal = days
            .iter()
            .map(|d| calculate_daily_pay(d, &nurse_policy(), 1).unwrap().line.amount)
            .sum();

        let total = calculator.calculate_paycheck(&forward).unwrap();
        prop_assert_eq!(total, gross / LEGACY_RESCALE_DIVISOR);
        prop_assert_eq!(total, calculator.calculate_paycheck(&reversed).unwrap());
    }
}
