//! The `Surface` trait: the host's 2D drawing target.
//!
//! A surface has pixel dimensions matching the viewport and offers the
//! handful of primitives the backdrops draw with. Implementations range
//! from the CPU raster buffer in `driftfield-scenes` to whatever canvas a
//! host embeds; scenes only ever see `&mut dyn Surface`.

use crate::color::Rgba;
use crate::error::SceneError;
use glam::DVec2;

/// A 2D drawing target with pixel dimensions equal to the viewport.
///
/// Coordinates are in surface space: x right, y down, origin at the top
/// left, matching pointer coordinates. Drawing outside the surface is valid
/// and clips silently.
///
/// This trait is **object-safe**.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Rgba);

    /// Draws a line segment of the given stroke width.
    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: f64);

    /// Draws a filled disc.
    fn draw_point(&mut self, center: DVec2, radius: f64, color: Rgba);

    /// Resizes the surface, discarding its contents.
    ///
    /// Returns `SceneError::InvalidDimensions` if either dimension is zero.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), SceneError>;
}
