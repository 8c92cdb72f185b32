use std::time::Duration;

use crate::{
    animation::{
        driver::{AnimationDriver, AnimationState},
        ease::Ease,
    },
    config::StarConfig,
    foundation::{
        core::{Argb, Point, Rect, Size},
        math::clamp_finite,
    },
    geometry::{
        layout::StarLayout,
        star::{StarGeometry, clamp_inner_radius_scale},
    },
    input::tap::{TapTracker, tap_target},
    paint::plan::{PaintPlan, RatingState, StyleConfig},
    render::{
        frame::{FrameInputs, draw_stars},
        surface::Surface,
    },
};

/// Work the host should schedule after a state change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Invalidation {
    /// Draw again on the next frame.
    pub redraw: bool,
    /// Preferred size changed; measure and lay out again.
    pub relayout: bool,
}

impl Invalidation {
    /// Return `true` when nothing is pending.
    pub fn is_clean(&self) -> bool {
        !self.redraw && !self.relayout
    }
}

type RatingCallback = Box<dyn FnMut(f64)>;

/// Interactive row of stars.
///
/// The host drives it with three entry points: [`StarRating::layout`] after measuring,
/// [`StarRating::draw`] every frame, and [`StarRating::on_pointer_down`] /
/// [`StarRating::on_pointer_up`] for input. While [`StarRating::is_animating`] is true the host
/// also calls [`StarRating::tick`] once per frame.
pub struct StarRating {
    star_count: usize,
    star_size: f64,
    star_spacing: f64,
    padding: f64,
    style: StyleConfig,
    rating: RatingState,
    bounds: Option<Rect>,
    layout: Option<StarLayout>,
    geometry: Option<StarGeometry>,
    animation: AnimationDriver,
    tap: TapTracker,
    on_rating_changed: Option<RatingCallback>,
    pending: Invalidation,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(&StarConfig::default())
    }
}

impl std::fmt::Debug for StarRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarRating")
            .field("star_count", &self.star_count)
            .field("rating", &self.rating)
            .field("style", &self.style)
            .field("layout", &self.layout)
            .field("animation", &self.animation.state())
            .finish_non_exhaustive()
    }
}

impl StarRating {
    /// Build a widget from `config`. The star count is fixed from here on.
    pub fn new(config: &StarConfig) -> Self {
        let star_count = config.star_count.max(1);
        let mut rating = RatingState::default();
        rating.set(config.rating, star_count);
        rating.previous = rating.current;

        Self {
            star_count,
            star_size: non_negative(config.star_size),
            star_spacing: non_negative(config.star_spacing),
            padding: non_negative(config.padding),
            style: config.style(),
            rating,
            bounds: None,
            layout: None,
            geometry: None,
            animation: AnimationDriver::new(config.animation_duration(), config.ease),
            tap: TapTracker::new(),
            on_rating_changed: None,
            pending: Invalidation::default(),
        }
    }

    /// Number of stars.
    pub fn star_count(&self) -> usize {
        self.star_count
    }

    /// Current rating in `[0, star_count]`.
    pub fn rating(&self) -> f64 {
        self.rating.current
    }

    /// Rating before the most recent change.
    pub fn previous_rating(&self) -> f64 {
        self.rating.previous
    }

    /// Current styling.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Star side length.
    pub fn star_size(&self) -> f64 {
        self.star_size
    }

    /// Gap between stars.
    pub fn star_spacing(&self) -> f64 {
        self.star_spacing
    }

    /// Layout from the last [`StarRating::layout`] call.
    pub fn star_layout(&self) -> Option<&StarLayout> {
        self.layout.as_ref()
    }

    /// Cached reference geometry.
    pub fn geometry(&self) -> Option<&StarGeometry> {
        self.geometry.as_ref()
    }

    /// Return `true` while a rating animation runs.
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Running animation snapshot.
    pub fn animation(&self) -> Option<AnimationState> {
        self.animation.state()
    }

    /// Register the callback fired with the new rating on every confirmed tap that selects.
    pub fn set_on_rating_changed(&mut self, f: impl FnMut(f64) + 'static) {
        self.on_rating_changed = Some(Box::new(f));
    }

    /// Remove the rating callback.
    pub fn clear_on_rating_changed(&mut self) {
        self.on_rating_changed = None;
    }

    /// Set the rating, clamped to `[0, star_count]`; schedules a redraw when it changes.
    ///
    /// Program-driven changes neither animate nor fire the callback.
    pub fn set_rating(&mut self, value: f64) {
        if self.rating.set(value, self.star_count) {
            tracing::debug!(
                rating = self.rating.current,
                previous = self.rating.previous,
                "rating set"
            );
            self.pending.redraw = true;
        }
    }

    /// Enable or disable tap selection; schedules a redraw.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.style.selectable = selectable;
        self.pending.redraw = true;
    }

    /// Set the star side length; schedules a relayout.
    pub fn set_star_size(&mut self, size: f64) {
        self.star_size = non_negative(size);
        self.relayout();
    }

    /// Set the gap between stars; schedules a relayout.
    pub fn set_star_spacing(&mut self, spacing: f64) {
        self.star_spacing = non_negative(spacing);
        self.relayout();
    }

    /// Set the inner-radius scale, clamped to `[0.1, 1.0]`; recomputes geometry and redraws.
    pub fn set_inner_radius_scale(&mut self, scale: f64) {
        if scale.is_nan() {
            tracing::warn!("ignoring NaN inner radius scale");
            return;
        }
        self.style.inner_radius_scale = clamp_inner_radius_scale(scale);
        self.recompute_geometry();
        self.pending.redraw = true;
    }

    /// Set the unselected color; schedules a redraw.
    pub fn set_base_color(&mut self, color: Argb) {
        self.style.base_color = color;
        self.pending.redraw = true;
    }

    /// Set the selected color; schedules a redraw.
    pub fn set_selected_color(&mut self, color: Argb) {
        self.style.selected_color = color;
        self.pending.redraw = true;
    }

    /// Set the outline stroke width (negative values become 0); schedules a redraw.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.style.stroke_width = non_negative(width);
        self.pending.redraw = true;
    }

    /// Set the animation length used by future ticks.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation.set_duration(duration);
    }

    /// Set the easing curve used by future ticks.
    pub fn set_ease(&mut self, ease: Ease) {
        self.animation.set_ease(ease);
    }

    /// Preferred widget size: the star row plus padding on every side.
    pub fn preferred_size(&self) -> Size {
        StarLayout::preferred_size(
            self.star_size,
            self.star_spacing,
            self.star_count,
            self.padding,
        )
    }

    /// Place the row centred in `bounds` (widget-local) and recompute geometry.
    ///
    /// A call with unchanged bounds is a no-op.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn layout(&mut self, bounds: Rect) {
        if self.bounds == Some(bounds) && self.layout.is_some() {
            return;
        }
        self.bounds = Some(bounds);
        self.apply_layout(bounds);
    }

    /// Draw the row. Returns the number of stars drawn (0 before the first layout).
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let Some(layout) = self.layout.as_ref() else {
            return 0;
        };
        draw_stars(surface, &self.frame_inputs(layout))
    }

    /// Resolved paint plans for the current frame, left to right.
    ///
    /// Empty whenever [`StarRating::draw`] would draw nothing.
    pub fn paint_plans(&self) -> Vec<PaintPlan> {
        let Some(layout) = self.layout.as_ref() else {
            return Vec::new();
        };
        let inputs = self.frame_inputs(layout);
        if !inputs.is_drawable() {
            return Vec::new();
        }
        inputs.plans()
    }

    /// Record a pointer press in widget-local coordinates.
    pub fn on_pointer_down(&mut self, p: Point) {
        self.tap.press(p);
    }

    /// Handle a pointer release; returns the tapped star index when the release confirms a tap
    /// on a star.
    pub fn on_pointer_up(&mut self, p: Point) -> Option<usize> {
        let p = self.tap.release(p)?;
        let layout = self.layout?;
        let index = tap_target(&layout, p)?;
        self.select(index);
        Some(index)
    }

    /// Apply a confirmed tap on star `index` as if it came from the pointer.
    ///
    /// Starts the animation for `index`. When selectable, also sets the rating to `index + 1`
    /// and fires the rating callback. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.star_count {
            return;
        }
        self.animation.start(index);

        if self.style.selectable {
            let before = self.rating.current;
            self.rating.set(index as f64 + 1.0, self.star_count);
            self.rating.previous = before;
            tracing::debug!(index, rating = self.rating.current, previous = before, "star selected");
            let rating = self.rating.current;
            if let Some(cb) = self.on_rating_changed.as_mut() {
                cb(rating);
            }
        } else {
            tracing::debug!(index, "star tapped (not selectable)");
        }
        self.pending.redraw = true;
    }

    /// Advance the animation by `dt`; schedules a redraw on every tick.
    ///
    /// Returns `true` while more ticks are wanted.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.animation.advance(dt).is_some() {
            self.pending.redraw = true;
        }
        self.animation.is_running()
    }

    /// Drain pending invalidation flags.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.pending)
    }

    /// Stop animating and drop any half-finished gesture.
    pub fn teardown(&mut self) {
        self.animation.stop();
        self.tap.cancel();
    }

    fn frame_inputs<'a>(&'a self, layout: &'a StarLayout) -> FrameInputs<'a> {
        FrameInputs {
            layout,
            geometry: self.geometry.as_ref(),
            rating: self.rating,
            animation: self.animation.state(),
            style: &self.style,
        }
    }

    fn relayout(&mut self) {
        self.pending.relayout = true;
        if let Some(bounds) = self.bounds {
            self.apply_layout(bounds);
        }
    }

    fn apply_layout(&mut self, bounds: Rect) {
        let layout =
            StarLayout::centered_in(bounds, self.star_size, self.star_spacing, self.star_count);
        tracing::debug!(reference = ?layout.reference, spacing = layout.spacing, "star layout");
        self.layout = Some(layout);
        self.recompute_geometry();
        self.pending.redraw = true;
    }

    fn recompute_geometry(&mut self) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let scale = self.style.inner_radius_scale;
        if self
            .geometry
            .as_ref()
            .is_some_and(|g| g.matches(layout.reference, scale))
        {
            return;
        }
        self.geometry = Some(StarGeometry::new(layout.reference, scale));
    }
}

fn non_negative(v: f64) -> f64 {
    clamp_finite(v, 0.0, f64::MAX).unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../tests/unit/widget.rs"]
mod tests;
