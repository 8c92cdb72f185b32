//! Starfill is the core of an interactive star-rating widget.
//!
//! It renders a row of five-pointed stars with fractional fill and animates rating changes.
//! Hosting is left to the caller, who provides:
//!
//! - a box to lay the row out in ([`StarRating::layout`])
//! - a [`Surface`] to draw on each frame ([`StarRating::draw`])
//! - pointer events and frame ticks ([`StarRating::on_pointer_up`], [`StarRating::tick`])
//!
//! [`CpuSurface`] rasterizes frames to RGBA8 for hosts without a canvas of their own.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Rating animation driver and easing.
pub mod animation;
/// JSON widget configuration.
pub mod config;
/// Star vertices and row layout.
pub mod geometry;
/// Pointer handling.
pub mod input;
/// Fill regimes, colors and per-star paint plans.
pub mod paint;
/// Drawing surfaces and the render loop.
pub mod render;
/// The stateful widget.
pub mod widget;

pub use crate::foundation::core::{Affine, Argb, BezPath, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{StarError, StarResult};

pub use crate::animation::driver::{AnimationDriver, AnimationState};
pub use crate::animation::ease::Ease;
pub use crate::config::StarConfig;
pub use crate::geometry::layout::StarLayout;
pub use crate::geometry::star::{StarGeometry, compute_star_points};
pub use crate::paint::color::blend;
pub use crate::paint::plan::{
    FillRegime, PaintOp, PaintPlan, RatingState, StyleConfig, resolve_star,
};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::frame::{FrameInputs, draw_stars};
pub use crate::render::recording::{RecordingSurface, SurfaceCommand};
pub use crate::render::surface::{ClipOp, Paint, PaintStyle, SaveGuard, Surface};
pub use crate::widget::{Invalidation, StarRating};
