use crate::{foundation::core::Point, geometry::layout::StarLayout};

/// Maximum press/release movement, per axis, for a release to count as a tap.
pub const TAP_SLOP: f64 = 10.0;

/// Tracks a press and confirms the matching release as a tap.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapTracker {
    down: Option<Point>,
}

impl TapTracker {
    /// Create a tracker with no press recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press position.
    pub fn press(&mut self, p: Point) {
        self.down = Some(p);
    }

    /// Consume the recorded press and return the release position if it is a tap.
    ///
    /// A release with no preceding press, or one that moved [`TAP_SLOP`] or more along either
    /// axis, is treated as a drag and ignored.
    pub fn release(&mut self, p: Point) -> Option<Point> {
        let down = self.down.take()?;
        is_tap(down, p).then_some(p)
    }

    /// Drop any recorded press.
    pub fn cancel(&mut self) {
        self.down = None;
    }
}

/// Return `true` when press and release differ by less than [`TAP_SLOP`] on both axes.
pub fn is_tap(down: Point, up: Point) -> bool {
    (down.x - up.x).abs() < TAP_SLOP && (down.y - up.y).abs() < TAP_SLOP
}

/// Map a confirmed tap to the star under it.
pub fn tap_target(layout: &StarLayout, p: Point) -> Option<usize> {
    layout.hit_test(p)
}

#[cfg(test)]
#[path = "../../tests/unit/input/tap.rs"]
mod tests;
