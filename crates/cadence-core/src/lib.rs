//! Shared plumbing for the cadence workspace: settings, logging bootstrap and
//! the core error type.

pub mod config;
pub mod error;
pub mod logging;
