//! Frame-driven rating animation.

/// Tick-driven progress state machine.
pub mod driver;
/// Easing curves applied to normalized progress.
pub mod ease;
