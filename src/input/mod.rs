//! Pointer input: tap confirmation and star hit testing.

/// Tap confirmation and star hit testing.
pub mod tap;
