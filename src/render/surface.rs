use std::ops::{Deref, DerefMut};

use crate::foundation::core::{Argb, BezPath, Point, Rect};

/// How a path is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum PaintStyle {
    /// Fill the interior only.
    Fill,
    /// Stroke the outline only.
    Stroke,
    /// Fill the interior, then stroke the outline with the same color.
    FillAndStroke,
}

/// Color, style and stroke width for one path draw.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Paint {
    /// Fill/stroke mode.
    pub style: PaintStyle,
    /// Straight-alpha color.
    pub color: Argb,
    /// Stroke width in local units; ignored for [`PaintStyle::Fill`].
    pub stroke_width: f64,
}

impl Paint {
    /// Stroke-only paint.
    pub fn stroke(color: Argb, stroke_width: f64) -> Self {
        Self {
            style: PaintStyle::Stroke,
            color,
            stroke_width,
        }
    }

    /// Fill-and-stroke paint.
    pub fn fill_and_stroke(color: Argb, stroke_width: f64) -> Self {
        Self {
            style: PaintStyle::FillAndStroke,
            color,
            stroke_width,
        }
    }

    /// Return `true` when the paint strokes the outline.
    ///
    /// A zero-width [`PaintStyle::Stroke`] still strokes (as a hairline); a zero-width
    /// [`PaintStyle::FillAndStroke`] only fills.
    pub fn strokes(&self) -> bool {
        match self.style {
            PaintStyle::Fill => false,
            PaintStyle::Stroke => true,
            PaintStyle::FillAndStroke => self.stroke_width > 0.0,
        }
    }

    /// Return `true` when the paint fills the interior.
    pub fn fills(&self) -> bool {
        matches!(self.style, PaintStyle::Fill | PaintStyle::FillAndStroke)
    }
}

/// Rectangular clip combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ClipOp {
    /// Keep only the inside of the rectangle.
    Intersect,
    /// Keep only the outside of the rectangle.
    Difference,
}

/// Path-based vector drawing target.
///
/// Transform and clip changes are recorded on a state stack: [`Surface::save`] pushes the
/// current state and [`Surface::restore`] pops it, undoing every rotation and clip applied in
/// between. Rotations and draws happen in widget-local coordinates; clip rectangles are given
/// in the coordinates current at the time of the call.
pub trait Surface {
    /// Push the current transform and clip.
    fn save(&mut self);

    /// Pop the most recently saved transform and clip. Unbalanced calls are ignored.
    fn restore(&mut self);

    /// Rotate subsequent drawing by `degrees` (clockwise in y-down space) about `pivot`.
    fn rotate_about(&mut self, degrees: f64, pivot: Point);

    /// Combine the current clip with `rect`.
    fn clip_rect(&mut self, rect: Rect, op: ClipOp);

    /// Draw `path` with `paint`.
    fn draw_path(&mut self, path: &BezPath, paint: &Paint);

    /// Fill `rect` with a solid color, source-over.
    fn fill_rect(&mut self, rect: Rect, color: Argb);
}

/// Saved surface state that restores itself when dropped.
///
/// Every exit path (including `?` and early `return`) pops exactly the state it pushed.
pub struct SaveGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SaveGuard<'a, S> {
    /// Save `surface` and return a guard that restores it on drop.
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SaveGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SaveGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SaveGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
