//! Evaluation inputs: the event start and the reference "now".

use chrono::{Local, NaiveDate, NaiveDateTime};

use cadence_core::config::EvaluationSettings;

use crate::error::RRuleResult;
use crate::rrule::core::RRule;
use crate::rrule::parse::parse_rrule;

/// The event's first occurrence and the moment to search from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationContext {
    pub event_start: NaiveDateTime,
    pub now: NaiveDateTime,
}

impl EvaluationContext {
    #[must_use]
    pub const fn new(event_start: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self { event_start, now }
    }

    /// The later of the event start and now. Searches begin here.
    #[must_use]
    pub fn anchor(&self) -> NaiveDateTime {
        if self.event_start > self.now {
            self.event_start
        } else {
            self.now
        }
    }

    #[must_use]
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor().date()
    }
}

/// A parsed rule held together with the start of the event it schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledRule {
    pub rule: RRule,
    /// When absent, evaluation treats "now" as the event start.
    pub event_start: Option<NaiveDateTime>,
}

impl ScheduledRule {
    #[must_use]
    pub const fn new(rule: RRule, event_start: Option<NaiveDateTime>) -> Self {
        Self { rule, event_start }
    }

    /// ## Summary
    /// Parses `text` and pairs it with the event start.
    ///
    /// ## Errors
    /// Returns the parser's error if `text` is not a valid RRULE.
    pub fn parse(text: &str, event_start: Option<NaiveDateTime>) -> RRuleResult<Self> {
        Ok(Self::new(parse_rrule(text)?, event_start))
    }

    #[must_use]
    pub fn context(&self, now: NaiveDateTime) -> EvaluationContext {
        EvaluationContext::new(self.event_start.unwrap_or(now), now)
    }

    /// ## Summary
    /// Next occurrence on or after `now`.
    ///
    /// ## Errors
    /// Returns `Unsupported` for frequencies and BY* combinations that are not resolved.
    pub fn next_occurrence(&self, now: NaiveDateTime) -> RRuleResult<Option<NaiveDate>> {
        super::next_occurrence(&self.rule, &self.context(now))
    }

    /// ## Summary
    /// Next occurrence on or after `now`, using explicit evaluation settings.
    ///
    /// ## Errors
    /// Returns `Unsupported` for frequencies and BY* combinations that are not resolved.
    pub fn next_occurrence_with(
        &self,
        now: NaiveDateTime,
        settings: &EvaluationSettings,
    ) -> RRuleResult<Option<NaiveDate>> {
        super::next_occurrence_with(&self.rule, &self.context(now), settings)
    }

    /// ## Summary
    /// Next occurrence on or after the local wall-clock time.
    ///
    /// ## Errors
    /// Returns `Unsupported` for frequencies and BY* combinations that are not resolved.
    pub fn next_occurrence_now(&self) -> RRuleResult<Option<NaiveDate>> {
        self.next_occurrence(Local::now().naive_local())
    }

    #[must_use]
    pub fn describe(&self) -> String {
        self.rule.describe()
    }
}
