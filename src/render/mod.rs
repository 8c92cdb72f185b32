//! Drawing surfaces and the per-frame render loop.

/// CPU raster surface powered by `vello_cpu`.
pub mod cpu;
/// Per-frame star drawing.
pub mod frame;
/// Command-recording surface.
pub mod recording;
/// Drawing surface contract.
pub mod surface;
