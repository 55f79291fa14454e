//! Amortization schedule strategies and their shared plumbing.

pub mod additional;
pub mod decreasing;
pub mod fixed;
pub mod quote;
pub mod schedule;
pub mod summary;
pub mod validation;
