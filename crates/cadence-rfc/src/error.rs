use thiserror::Error;

/// Errors raised while parsing or evaluating a recurrence rule.
///
/// Running out of occurrences is not an error; evaluation reports it as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RRuleError {
    /// Missing or garbled `RRULE:` prefix, `KEY=VALUE` token, or missing FREQ.
    #[error("Malformed rule: {0}")]
    MalformedRule(String),

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Field name and the offending value (bad FREQ or WKST code).
    #[error("Invalid {0} value: {1}")]
    InvalidEnumValue(&'static str, String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid integer: {0}")]
    InvalidInteger(String),

    #[error("Invalid UNTIL format: {0}")]
    InvalidUntilFormat(String),

    /// A frequency or BY* combination the calculator does not resolve.
    #[error("Unsupported recurrence: {0}")]
    Unsupported(String),
}

pub type RRuleResult<T> = std::result::Result<T, RRuleError>;
