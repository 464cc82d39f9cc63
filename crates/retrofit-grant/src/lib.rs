//! Eligibility and funding calculator for the "Czyste Powietrze" home retrofit programme.
//!
//! The [`grants`] module holds the pure calculation core; the remaining modules carry the
//! configuration, telemetry, and error plumbing shared with the HTTP service.

pub mod config;
pub mod error;
pub mod grants;
pub mod telemetry;
