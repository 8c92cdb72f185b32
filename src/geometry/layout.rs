use crate::foundation::core::{Point, Rect, Size};

/// Horizontal row of identical stars.
///
/// The reference star is star 0; star `i` is the reference shifted right by
/// `i * (star_width + spacing)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarLayout {
    /// Bounding box of star 0 in widget-local coordinates.
    pub reference: Rect,
    /// Gap between neighbouring stars.
    pub spacing: f64,
    /// Number of stars, at least 1.
    pub count: usize,
}

impl StarLayout {
    /// Create a layout from an explicit reference rectangle.
    pub fn new(reference: Rect, spacing: f64, count: usize) -> Self {
        Self {
            reference,
            spacing: spacing.max(0.0),
            count: count.max(1),
        }
    }

    /// Center a row of `count` square stars of side `star_size` inside `bounds`.
    pub fn centered_in(bounds: Rect, star_size: f64, spacing: f64, count: usize) -> Self {
        let star_size = star_size.max(0.0);
        let spacing = spacing.max(0.0);
        let count = count.max(1);
        let row_width = row_width(star_size, spacing, count);
        let center = bounds.center();
        let x0 = center.x - row_width / 2.0;
        let y0 = center.y - star_size / 2.0;
        Self {
            reference: Rect::new(x0, y0, x0 + star_size, y0 + star_size),
            spacing,
            count,
        }
    }

    /// Preferred widget size: the row plus `padding` on every side.
    pub fn preferred_size(star_size: f64, spacing: f64, count: usize, padding: f64) -> Size {
        let star_size = star_size.max(0.0);
        let padding = padding.max(0.0);
        Size::new(
            row_width(star_size, spacing.max(0.0), count.max(1)) + padding * 2.0,
            star_size + padding * 2.0,
        )
    }

    /// Width of a single star.
    pub fn star_width(&self) -> f64 {
        self.reference.width()
    }

    /// Horizontal distance between the left edges of neighbouring stars.
    pub fn pitch(&self) -> f64 {
        self.star_width() + self.spacing
    }

    /// Horizontal offset of star `index` relative to the reference star.
    pub fn offset(&self, index: usize) -> f64 {
        self.pitch() * index as f64
    }

    /// Bounding box of star `index`.
    pub fn star_rect(&self, index: usize) -> Rect {
        self.reference + kurbo::Vec2::new(self.offset(index), 0.0)
    }

    /// Center of star `index`.
    pub fn star_center(&self, index: usize) -> Point {
        self.star_rect(index).center()
    }

    /// Total row width derived from count, size and spacing.
    pub fn total_width(&self) -> f64 {
        row_width(self.star_width(), self.spacing, self.count)
    }

    /// First star (left to right) whose box contains `p`.
    ///
    /// Boxes are half-open: the left and top edges are inside, the right and bottom edges are
    /// not, so a point on a shared edge never matches two stars.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        (0..self.count).find(|&i| contains_half_open(self.star_rect(i), p))
    }
}

fn row_width(star_size: f64, spacing: f64, count: usize) -> f64 {
    star_size * count as f64 + spacing * count.saturating_sub(1) as f64
}

fn contains_half_open(r: Rect, p: Point) -> bool {
    r.x0 < r.x1 && r.y0 < r.y1 && p.x >= r.x0 && p.x < r.x1 && p.y >= r.y0 && p.y < r.y1
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/layout.rs"]
mod tests;
