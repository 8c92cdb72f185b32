use smallvec::{SmallVec, smallvec};

use crate::{
    animation::driver::AnimationState,
    foundation::core::{Argb, Point, Rect},
    geometry::star::{TIP_STEP_DEG, clamp_inner_radius_scale},
    paint::color::blend,
    render::surface::Paint,
};

/// Visual styling shared by every star.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StyleConfig {
    /// Whether taps change the rating.
    pub selectable: bool,
    /// Outline color of unselected stars.
    pub base_color: Argb,
    /// Fill color of selected stars.
    pub selected_color: Argb,
    /// Outline stroke width.
    pub stroke_width: f64,
    /// Inner radius as a fraction of the outer radius, in `[0.1, 1.0]`.
    pub inner_radius_scale: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            selectable: false,
            base_color: Argb::GRAY,
            selected_color: Argb::RED,
            stroke_width: 2.0,
            inner_radius_scale: 0.6,
        }
    }
}

impl StyleConfig {
    /// Copy with the inner-radius scale clamped and a non-negative stroke width.
    pub fn normalized(mut self) -> Self {
        self.inner_radius_scale = clamp_inner_radius_scale(self.inner_radius_scale);
        if self.stroke_width.is_nan() || self.stroke_width < 0.0 {
            self.stroke_width = 0.0;
        }
        self
    }
}

/// Current and previous rating, as read by the resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct RatingState {
    /// Rating shown now, in `[0, star_count]`.
    pub current: f64,
    /// Rating before the last change; animation start reference.
    pub previous: f64,
}

impl RatingState {
    /// Store `value` clamped to `[0, star_count]`.
    ///
    /// `previous` is updated only when the stored value actually changes. NaN is ignored.
    /// Returns `true` on change.
    pub fn set(&mut self, value: f64, star_count: usize) -> bool {
        let Some(v) = crate::foundation::math::clamp_finite(value, 0.0, star_count as f64) else {
            tracing::warn!("ignoring NaN rating");
            return false;
        };
        if v == self.current {
            return false;
        }
        self.previous = self.current;
        self.current = v;
        true
    }
}

/// Which of the three fill states a star is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum FillRegime {
    /// Entirely covered by the rating.
    Full,
    /// Not covered at all.
    Empty,
    /// Covered by a fraction of its width.
    Partial,
}

impl FillRegime {
    /// Classify star `index` for `rating` using `d = rating - index - 1`.
    ///
    /// `d >= 0` is full, `d <= -1` is empty, anything in between is partial.
    pub fn classify(index: usize, rating: f64) -> Self {
        let d = rating - index as f64 - 1.0;
        if d >= 0.0 {
            Self::Full
        } else if d <= -1.0 {
            Self::Empty
        } else {
            Self::Partial
        }
    }
}

/// One step of a [`PaintPlan`], executed in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum PaintOp {
    /// Draw the star outline path with this paint, under the plan rotation.
    Star(Paint),
    /// Remove this rectangle from the clip for the remaining steps.
    ClipOut(Rect),
    /// Paint a rectangle (unrotated) with this color.
    Rect {
        /// Rectangle in widget-local coordinates.
        rect: Rect,
        /// Fill color.
        color: Argb,
    },
}

/// Fully resolved drawing instructions for one star in one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PaintPlan {
    /// Star index.
    pub index: usize,
    /// Fill state the star was classified into.
    pub regime: FillRegime,
    /// Bounding box of this star.
    pub star: Rect,
    /// Rotation applied to every [`PaintOp::Star`] step, in degrees about [`PaintPlan::pivot`].
    pub rotation_deg: Option<f64>,
    /// Star center.
    pub pivot: Point,
    /// Partial-fill rectangle: the right-hand part of the star that is left unfilled.
    pub clip: Option<Rect>,
    /// Steps to execute, in order.
    pub ops: SmallVec<[PaintOp; 4]>,
}

impl PaintPlan {
    /// Fraction of the star width, from the left, that shows the fill.
    pub fn filled_fraction(&self) -> f64 {
        match (self.regime, self.clip) {
            (FillRegime::Full, _) => 1.0,
            (FillRegime::Empty, _) => 0.0,
            (FillRegime::Partial, Some(clip)) => {
                let w = self.star.width();
                if w <= 0.0 {
                    0.0
                } else {
                    ((clip.x0 - self.star.x0) / w).clamp(0.0, 1.0)
                }
            }
            (FillRegime::Partial, None) => 0.0,
        }
    }

    /// Color of the last star draw in the plan.
    pub fn color(&self) -> Option<Argb> {
        self.ops.iter().rev().find_map(|op| match op {
            PaintOp::Star(p) => Some(p.color),
            _ => None,
        })
    }
}

/// Decide how star `index` (with bounding box `star`) is drawn this frame.
///
/// `anim` is the running animation, if any. The branch conditions reproduce the widget's
/// established behaviour exactly, including the asymmetric tint rules for multi-star jumps.
pub fn resolve_star(
    index: usize,
    star: Rect,
    rating: RatingState,
    anim: Option<AnimationState>,
    style: &StyleConfig,
) -> PaintPlan {
    let RatingState {
        current: r,
        previous: old,
    } = rating;
    let star_no = index as f64 + 1.0;
    let is_target = anim.is_some_and(|a| a.target == index);
    let stroke_width = style.stroke_width;
    let spin = |a: AnimationState| a.progress * TIP_STEP_DEG;
    let regime = FillRegime::classify(index, r);

    let mut rotation_deg = None;
    let mut clip = None;
    let ops: SmallVec<[PaintOp; 4]> = match regime {
        FillRegime::Full => {
            let mut color = style.selected_color;
            if let Some(a) = anim {
                let newly_covered = style.selectable && r > old && old + 1.0 <= star_no && star_no <= r;
                if is_target || newly_covered {
                    rotation_deg = Some(spin(a));
                    let old_is_whole = old.fract() == 0.0;
                    if style.selectable && (!is_target || (star_no > old && old_is_whole)) {
                        color = blend(style.base_color, style.selected_color, a.progress);
                    }
                }
            }
            smallvec![PaintOp::Star(Paint::fill_and_stroke(color, stroke_width))]
        }
        FillRegime::Empty => {
            let mut ops = SmallVec::new();
            let mut color = style.base_color;
            if let Some(a) = anim {
                let newly_uncovered =
                    style.selectable && r < old && r + 1.0 <= star_no && star_no <= old;
                if is_target || newly_uncovered {
                    rotation_deg = Some(spin(a));
                    if style.selectable && !is_target {
                        color = blend(style.selected_color, style.base_color, a.progress);
                        ops.push(PaintOp::Star(Paint::fill_and_stroke(color, stroke_width)));
                    }
                }
            }
            ops.push(PaintOp::Star(Paint::stroke(color, stroke_width)));
            ops
        }
        FillRegime::Partial => {
            let mut color = style.selected_color;
            let right = star.x1;
            let width = star.width();
            let mut left = right - width * (1.0 + r.floor() - r);

            if style.selectable || is_target {
                rotation_deg = anim.map(spin);
            }
            if let Some(a) = anim.filter(|_| style.selectable && !is_target) {
                let old_gap = old.floor() + 1.0 - old;
                if r > old {
                    left = right - width * old_gap * (1.0 - a.progress);
                } else {
                    color = blend(style.selected_color, style.base_color, a.progress);
                    left = right - width * (old_gap + old.fract() * a.progress);
                }
            }

            let unfilled = Rect::new(left, star.y0, right, star.y1);
            clip = Some(unfilled);
            smallvec![
                PaintOp::Star(Paint::stroke(color, stroke_width)),
                PaintOp::ClipOut(unfilled),
                PaintOp::Star(Paint::fill_and_stroke(color, stroke_width)),
                PaintOp::Rect {
                    rect: unfilled,
                    color: Argb::TRANSPARENT,
                },
            ]
        }
    };

    PaintPlan {
        index,
        regime,
        star,
        rotation_deg,
        pivot: star.center(),
        clip,
        ops,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/plan.rs"]
mod tests;
