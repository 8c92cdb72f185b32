//! Per-star paint resolution.

/// Color blending and parsing.
pub mod color;
/// Fill regimes and ready-to-execute paint plans.
pub mod plan;
