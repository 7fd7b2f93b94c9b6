//! Schedule model.
//!
//! A [`Schedule`] is the ordered list of days handed to the calculator.

use serde::{Deserialize, Serialize};

use super::Day;

/// An ordered sequence of worked days.
///
/// Iteration order is input order. Days are neither sorted nor de-duplicated.
///
/// # Examples
///
/// ```
/// use paycheck_engine::models::{Day, Schedule};
///
/// let schedule: Schedule = vec![
///     Day::new("1-Aug-21", "9:00 am", "5:00 pm"),
///     Day::new("2-Aug-21", "9:00 am", "5:00 pm"),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(schedule.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    days: Vec<Day>,
}

impl Schedule {
    /// Creates a schedule from days in input order.
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    /// Returns the days in input order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if the schedule holds no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates the days in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Day> {
        self.days.iter()
    }
}

impl FromIterator<Day> for Schedule {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Day;
    type IntoIter = std::slice::Iter<'a, Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
