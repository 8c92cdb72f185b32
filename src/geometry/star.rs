use crate::foundation::core::{BezPath, Point, Rect, Vec2};

/// Number of tips on every star.
pub const STAR_TIPS: usize = 5;

/// Angular distance between consecutive tips, in degrees.
pub const TIP_STEP_DEG: f64 = 72.0;

/// Angle of the first outer vertex (lower right), clockwise from the positive x axis.
const OUTER_START_DEG: f64 = 54.0;

/// Angle of the first inner vertex.
const INNER_START_DEG: f64 = 18.0;

/// Smallest and largest accepted inner-radius scale.
pub const INNER_RADIUS_SCALE_MIN: f64 = 0.1;
/// See [`INNER_RADIUS_SCALE_MIN`].
pub const INNER_RADIUS_SCALE_MAX: f64 = 1.0;

/// Vertices of the reference star, in widget-local coordinates.
///
/// Computed once per layout (or inner-radius change) and shared by every star in the row;
/// star `i` is the reference translated horizontally by its layout offset.
#[derive(Clone, Debug, PartialEq)]
pub struct StarGeometry {
    /// Bounding box the vertices were computed for.
    pub bounds: Rect,
    /// Inner-radius scale the vertices were computed for.
    pub inner_radius_scale: f64,
    /// Star tips, clockwise from the lower-right tip.
    pub outer: [Point; STAR_TIPS],
    /// Concave vertices, clockwise, each preceding the tip with the same index.
    pub inner: [Point; STAR_TIPS],
}

impl StarGeometry {
    /// Compute geometry for `bounds`. The scale is clamped to `[0.1, 1.0]`.
    pub fn new(bounds: Rect, inner_radius_scale: f64) -> Self {
        let scale = clamp_inner_radius_scale(inner_radius_scale);
        let (outer, inner) = compute_star_points(bounds, scale);
        tracing::debug!(?bounds, scale, "computed star geometry");
        Self {
            bounds,
            inner_radius_scale: scale,
            outer,
            inner,
        }
    }

    /// Return `true` when the cached vertices were built for these inputs.
    pub fn matches(&self, bounds: Rect, inner_radius_scale: f64) -> bool {
        self.bounds == bounds && self.inner_radius_scale == inner_radius_scale
    }

    /// Center of the reference star.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Outline vertices in drawing order: `inner[0], outer[0], inner[1], ... outer[4]`.
    pub fn outline_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.inner
            .iter()
            .zip(self.outer.iter())
            .flat_map(|(i, o)| [*i, *o])
    }

    /// Closed outline of the reference star translated horizontally by `dx`.
    pub fn outline_path(&self, dx: f64) -> BezPath {
        let offset = Vec2::new(dx, 0.0);
        let mut path = BezPath::new();
        for (n, p) in self.outline_points().enumerate() {
            if n == 0 {
                path.move_to(p + offset);
            } else {
                path.line_to(p + offset);
            }
        }
        path.close_path();
        path
    }
}

/// Clamp an inner-radius scale into `[0.1, 1.0]`; NaN falls back to the minimum.
pub fn clamp_inner_radius_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return INNER_RADIUS_SCALE_MIN;
    }
    scale.clamp(INNER_RADIUS_SCALE_MIN, INNER_RADIUS_SCALE_MAX)
}

/// Compute the 5 outer and 5 inner vertices of a star inscribed in `bounds`.
///
/// Both circles are centered on `bounds.center()`. The outer radius is half the box width and
/// the inner radius is that times `inner_radius_scale`. Angles grow clockwise in y-down space,
/// outer vertices start at 54° and inner vertices at 18°, both stepping by 72°.
pub fn compute_star_points(
    bounds: Rect,
    inner_radius_scale: f64,
) -> ([Point; STAR_TIPS], [Point; STAR_TIPS]) {
    let center = bounds.center();
    let outer_radius = bounds.width() / 2.0;
    let inner_radius = outer_radius * inner_radius_scale;

    let on_circle = |radius: f64, start_deg: f64, i: usize| -> Point {
        let deg = start_deg + TIP_STEP_DEG * i as f64;
        center + Vec2::from_angle(deg.to_radians()) * radius
    };

    let outer = std::array::from_fn(|i| on_circle(outer_radius, OUTER_START_DEG, i));
    let inner = std::array::from_fn(|i| on_circle(inner_radius, INNER_START_DEG, i));
    (outer, inner)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/star.rs"]
mod tests;
