//! Rating Gate - decides who may watch what
//!
//! The gate compares a viewer's ceiling with a content item's
//! classification and returns a [`Verdict`](rating_types::Verdict).
//! Two kinds of failure are kept apart:
//!
//! - contract violations (blank title, unparseable classification) are
//!   returned as [`GateError`];
//! - business outcomes (title unknown, rating above the ceiling) are
//!   ordinary denied verdicts.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod gate;
pub mod legacy;

pub use config::GateConfig;
pub use error::{GateError, Result};
pub use gate::AccessGate;
pub use legacy::{LEGACY_ALLOWED, LEGACY_DENIED};
