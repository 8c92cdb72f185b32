use crate::{
    foundation::core::{Affine, Argb, BezPath, Point, Rect},
    render::surface::{ClipOp, Paint, Surface},
};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    /// [`Surface::save`].
    Save,
    /// [`Surface::restore`] that matched a save.
    Restore,
    /// [`Surface::rotate_about`].
    Rotate {
        /// Rotation in degrees.
        degrees: f64,
        /// Rotation center.
        pivot: Point,
    },
    /// [`Surface::clip_rect`].
    Clip {
        /// Clip rectangle.
        rect: Rect,
        /// Combination mode.
        op: ClipOp,
    },
    /// [`Surface::draw_path`], with the transform and clips in effect.
    DrawPath {
        /// Path as passed in.
        path: BezPath,
        /// Paint as passed in.
        paint: Paint,
        /// Accumulated transform at draw time.
        transform: Affine,
        /// Clips active at draw time, outermost first.
        clips: Vec<(Rect, ClipOp)>,
    },
    /// [`Surface::fill_rect`].
    FillRect {
        /// Rectangle as passed in.
        rect: Rect,
        /// Fill color.
        color: Argb,
    },
}

#[derive(Clone, Debug)]
struct State {
    transform: Affine,
    clips: Vec<(Rect, ClipOp)>,
}

/// Surface that records every call instead of rasterizing.
///
/// Useful for tests and for hosts that replay draw lists on their own canvas.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    current: State,
    stack: Vec<State>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            current: State {
                transform: Affine::IDENTITY,
                clips: Vec::new(),
            },
            stack: Vec::new(),
        }
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Number of saves not yet restored.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Recorded path draws in call order.
    pub fn draws(&self) -> impl Iterator<Item = (&BezPath, &Paint, Affine)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            SurfaceCommand::DrawPath {
                path,
                paint,
                transform,
                ..
            } => Some((path, paint, *transform)),
            _ => None,
        })
    }

    /// Forget everything recorded so far and reset the state stack.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.current.clone());
        self.commands.push(SurfaceCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.current = prev;
            self.commands.push(SurfaceCommand::Restore);
        }
    }

    fn rotate_about(&mut self, degrees: f64, pivot: Point) {
        self.current.transform *= Affine::rotate_about(degrees.to_radians(), pivot);
        self.commands.push(SurfaceCommand::Rotate { degrees, pivot });
    }

    fn clip_rect(&mut self, rect: Rect, op: ClipOp) {
        self.current.clips.push((rect, op));
        self.commands.push(SurfaceCommand::Clip { rect, op });
    }

    fn draw_path(&mut self, path: &BezPath, paint: &Paint) {
        self.commands.push(SurfaceCommand::DrawPath {
            path: path.clone(),
            paint: *paint,
            transform: self.current.transform,
            clips: self.current.clips.clone(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Argb) {
        self.commands.push(SurfaceCommand::FillRect { rect, color });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
