//! Type definitions for recurrence rules.

mod rrule;

pub use self::rrule::{Frequency, RRule, RRuleUntil, Weekday, WeekdayNum};
