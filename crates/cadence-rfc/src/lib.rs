//! RFC 5545 recurrence rules: parsing RRULE text and finding the next
//! occurrence of a recurring event.
//!
//! ## Example
//!
//! ```rust
//! use cadence_rfc::rrule::{EvaluationContext, RRule, next_occurrence};
//! use chrono::NaiveDate;
//!
//! let rule = RRule::parse("RRULE:FREQ=WEEKLY;BYDAY=WE,TH,FR").unwrap();
//! let start = NaiveDate::from_ymd_opt(2017, 12, 20).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let now = NaiveDate::from_ymd_opt(2017, 12, 24).unwrap().and_hms_opt(9, 0, 0).unwrap();
//!
//! let next = next_occurrence(&rule, &EvaluationContext::new(start, now)).unwrap();
//! assert_eq!(next, NaiveDate::from_ymd_opt(2017, 12, 27));
//! ```

pub mod error;
pub mod rrule;

pub use error::{RRuleError, RRuleResult};
