//! Shared value types, errors and scalar helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
