//! RRULE text parsing (RFC 5545 §3.3.10).
//!
//! - Parser: content-line prefix and rule-level validation
//! - Values: part dispatch and per-value grammars (integer lists, BYDAY, UNTIL)

mod parser;
mod values;

pub use parser::{RRULE_PREFIX, parse_rrule};
pub use values::{parse_recur, parse_until};
