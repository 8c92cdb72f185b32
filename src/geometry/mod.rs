//! Star geometry and row layout.
//!
//! Geometry is computed once per layout for a single reference star and translated per star.

/// Row layout: reference star rectangle, spacing and per-star offsets.
pub mod layout;
/// Vertex computation and outline path building.
pub mod star;
