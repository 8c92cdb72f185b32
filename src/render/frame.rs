use crate::{
    animation::driver::AnimationState,
    foundation::core::BezPath,
    geometry::{layout::StarLayout, star::StarGeometry},
    paint::plan::{PaintOp, PaintPlan, RatingState, StyleConfig, resolve_star},
    render::surface::{ClipOp, SaveGuard, Surface},
};

/// Everything the render loop reads for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInputs<'a> {
    /// Row layout.
    pub layout: &'a StarLayout,
    /// Cached reference geometry; `None` before the first layout.
    pub geometry: Option<&'a StarGeometry>,
    /// Current and previous rating.
    pub rating: RatingState,
    /// Running animation, if any.
    pub animation: Option<AnimationState>,
    /// Shared styling.
    pub style: &'a StyleConfig,
}

impl FrameInputs<'_> {
    /// Geometry usable with this layout, or `None` when it is missing or stale.
    fn usable_geometry(&self) -> Option<&StarGeometry> {
        self.geometry
            .filter(|g| g.bounds == self.layout.reference)
    }

    /// Return `true` when geometry matches the layout, so [`draw_stars`] will draw.
    pub fn is_drawable(&self) -> bool {
        self.usable_geometry().is_some()
    }

    /// Resolve paint plans for every star, left to right.
    ///
    /// Plans are resolved even when [`FrameInputs::is_drawable`] is false.
    pub fn plans(&self) -> Vec<PaintPlan> {
        (0..self.layout.count)
            .map(|i| {
                resolve_star(
                    i,
                    self.layout.star_rect(i),
                    self.rating,
                    self.animation,
                    self.style,
                )
            })
            .collect()
    }
}

/// Draw every star of the row onto `surface`.
///
/// Returns the number of stars drawn; 0 when geometry is not available for the layout.
#[tracing::instrument(level = "trace", skip_all, fields(count = inputs.layout.count))]
pub fn draw_stars<S: Surface + ?Sized>(surface: &mut S, inputs: &FrameInputs<'_>) -> usize {
    let Some(geometry) = inputs.usable_geometry() else {
        tracing::trace!("skipping draw: geometry not computed for current layout");
        return 0;
    };

    for plan in inputs.plans() {
        let outline = geometry.outline_path(inputs.layout.offset(plan.index));
        execute_plan(surface, &outline, &plan);
    }
    inputs.layout.count
}

/// Execute one resolved plan against `surface` using `outline` as the star path.
///
/// Rotation is scoped to each star draw; clip changes are scoped to the plan.
pub fn execute_plan<S: Surface + ?Sized>(surface: &mut S, outline: &BezPath, plan: &PaintPlan) {
    let mut scope = SaveGuard::new(surface);
    for op in &plan.ops {
        match op {
            PaintOp::Star(paint) => {
                let mut star = SaveGuard::new(&mut *scope);
                if let Some(deg) = plan.rotation_deg {
                    star.rotate_about(deg, plan.pivot);
                }
                star.draw_path(outline, paint);
            }
            PaintOp::ClipOut(rect) => scope.clip_rect(*rect, ClipOp::Difference),
            PaintOp::Rect { rect, color } => scope.fill_rect(*rect, *color),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
