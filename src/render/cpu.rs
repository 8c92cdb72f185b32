use crate::{
    foundation::{
        core::{Affine, Argb, BezPath, Point, Rect},
        error::{StarError, StarResult},
    },
    render::surface::{ClipOp, Paint, Surface},
};

/// Stroke width used for zero-width outlines.
const HAIRLINE: f64 = 1.0;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of the pixels with alpha un-premultiplied, suitable for PNG output.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

#[derive(Clone, Copy, Debug)]
struct SavedState {
    transform: Affine,
    layers: usize,
}

/// [`Surface`] that rasterizes on the CPU with `vello_cpu`.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    transform: Affine,
    layers: usize,
    stack: Vec<SavedState>,
}

impl CpuSurface {
    /// Create a surface of `width x height` pixels cleared to `background` (transparent if `None`).
    pub fn new(width: u32, height: u32, background: Option<Argb>) -> StarResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| StarError::render("surface width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| StarError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(StarError::validation("surface width/height must be > 0"));
        }

        let mut surface = Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            transform: Affine::IDENTITY,
            layers: 0,
            stack: Vec::new(),
        };
        if let Some(bg) = background {
            let bounds = surface.bounds();
            surface.fill_rect(bounds, bg);
        }
        Ok(surface)
    }

    /// Surface bounds in pixel coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Close any open state and rasterize everything drawn so far.
    pub fn finish(mut self) -> FrameRGBA {
        while self.layers > 0 {
            self.ctx.pop_layer();
            self.layers -= 1;
        }
        self.ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn sync_transform(&mut self) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
    }

    /// Region outside `rect`, as four non-overlapping bands covering the visible canvas.
    fn complement_path(&self, rect: Rect) -> BezPath {
        let visible = self.transform.inverse().transform_rect_bbox(self.bounds());
        let outer = visible.union(rect);
        let bands = [
            Rect::new(outer.x0, outer.y0, outer.x1, rect.y0),
            Rect::new(outer.x0, rect.y1, outer.x1, outer.y1),
            Rect::new(outer.x0, rect.y0, rect.x0, rect.y1),
            Rect::new(rect.x1, rect.y0, outer.x1, rect.y1),
        ];
        let mut path = BezPath::new();
        for band in bands.into_iter().filter(|b| b.width() > 0.0 && b.height() > 0.0) {
            push_rect(&mut path, band);
        }
        path
    }
}

impl Surface for CpuSurface {
    fn save(&mut self) {
        self.stack.push(SavedState {
            transform: self.transform,
            layers: self.layers,
        });
    }

    fn restore(&mut self) {
        let Some(saved) = self.stack.pop() else {
            return;
        };
        while self.layers > saved.layers {
            self.ctx.pop_layer();
            self.layers -= 1;
        }
        self.transform = saved.transform;
    }

    fn rotate_about(&mut self, degrees: f64, pivot: Point) {
        self.transform *= Affine::rotate_about(degrees.to_radians(), pivot);
    }

    fn clip_rect(&mut self, rect: Rect, op: ClipOp) {
        let path = match op {
            ClipOp::Intersect => {
                let mut p = BezPath::new();
                push_rect(&mut p, rect);
                p
            }
            ClipOp::Difference => self.complement_path(rect),
        };
        self.sync_transform();
        self.ctx.push_clip_layer(&bezpath_to_cpu(&path));
        self.layers += 1;
    }

    fn draw_path(&mut self, path: &BezPath, paint: &Paint) {
        self.sync_transform();
        self.ctx.set_paint(color_to_cpu(paint.color));
        let cpu_path = bezpath_to_cpu(path);
        if paint.fills() {
            self.ctx.fill_path(&cpu_path);
        }
        if paint.strokes() {
            let width = if paint.stroke_width > 0.0 {
                paint.stroke_width
            } else {
                HAIRLINE
            };
            self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
            self.ctx.stroke_path(&cpu_path);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Argb) {
        // Source-over with zero alpha leaves the target untouched.
        if color.is_transparent() {
            return;
        }
        self.sync_transform();
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }
}

fn push_rect(path: &mut BezPath, r: Rect) {
    path.move_to((r.x0, r.y0));
    path.line_to((r.x1, r.y0));
    path.line_to((r.x1, r.y1));
    path.line_to((r.x0, r.y1));
    path.close_path();
}

fn color_to_cpu(c: Argb) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r(), c.g(), c.b(), c.a())
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
