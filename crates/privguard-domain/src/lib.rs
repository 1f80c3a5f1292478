//! Pure check evaluation (no IO).
//!
//! Input: a host accessor constructed elsewhere.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod defaults;
pub mod policy;
pub mod report;

pub mod checks;
mod engine;
mod fingerprint;

#[doc(hidden)]
pub mod test_support;

pub use engine::evaluate;
