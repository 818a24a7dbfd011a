//! iCalendar recurrence rules (RFC 5545 §3.3.10, §3.8.5.3).
//!
//! - `core`: the rule model and its canonical text form
//! - `parse`: RRULE text into an [`RRule`]
//! - `expand`: next-occurrence calculation

pub mod core;
pub mod expand;
pub mod parse;

pub use self::core::{Frequency, RRule, RRuleUntil, Weekday, WeekdayNum};
pub use expand::{EvaluationContext, ScheduledRule, next_occurrence, next_occurrence_with};
pub use parse::parse_rrule;
