//! CPU raster implementation of the `Surface` trait.
//!
//! Pixels are RGBA8, row-major, straight alpha. Strokes are rasterized by
//! signed-distance coverage: each pixel inside a primitive's expanded
//! bounding box is blended once with a coverage weight derived from its
//! center's distance to the primitive, giving soft half-pixel edges and
//! correct alpha for overlapping strokes.

use driftfield_core::{Rgba, SceneError, Surface};
use glam::DVec2;

/// An RGBA8 pixel buffer implementing [`Surface`].
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterSurface {
    /// Creates a transparent-black surface of the given pixel dimensions.
    ///
    /// Returns `SceneError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        })
    }

    /// Read-only access to the raw RGBA8 buffer (row-major).
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The RGBA8 value of one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds; test and host code addressing
    /// pixels directly is expected to stay inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Source-over blend of `color` into one pixel, scaled by `coverage`.
    fn blend(&mut self, x: i64, y: i64, color: Rgba, coverage: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let sa = color.a.clamp(0.0, 1.0) * coverage.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let dst_a = self.data[idx + 3] as f64 / 255.0;
        let out = |src: f64, dst: u8| -> u8 {
            let d = dst as f64 / 255.0;
            ((src * sa + d * (1.0 - sa)) * 255.0).round() as u8
        };
        self.data[idx] = out(color.r, self.data[idx]);
        self.data[idx + 1] = out(color.g, self.data[idx + 1]);
        self.data[idx + 2] = out(color.b, self.data[idx + 2]);
        self.data[idx + 3] = ((sa + dst_a * (1.0 - sa)) * 255.0).round() as u8;
    }

    /// Blends every pixel whose center lies within `radius + 1/2` of the
    /// shape described by `distance`, weighting by edge coverage.
    fn stamp(
        &mut self,
        min: DVec2,
        max: DVec2,
        radius: f64,
        color: Rgba,
        distance: impl Fn(DVec2) -> f64,
    ) {
        let x0 = (min.x - radius - 1.0).floor().max(0.0) as i64;
        let y0 = (min.y - radius - 1.0).floor().max(0.0) as i64;
        let x1 = (max.x + radius + 1.0).ceil().min(self.width as f64) as i64;
        let y1 = (max.y + radius + 1.0).ceil().min(self.height as f64) as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                let center = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                let coverage = radius + 0.5 - distance(center);
                if coverage > 0.0 {
                    self.blend(x, y, color, coverage.min(1.0));
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Rgba) {
        let px = color.to_rgba8();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: f64) {
        let radius = (width.max(0.0)) / 2.0;
        let ab = to - from;
        let len_sq = ab.length_squared();
        self.stamp(from.min(to), from.max(to), radius, color, move |p| {
            // Distance from p to the closest point on the segment.
            let t = if len_sq > 0.0 {
                ((p - from).dot(ab) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            p.distance(from + ab * t)
        });
    }

    fn draw_point(&mut self, center: DVec2, radius: f64, color: Rgba) {
        let radius = radius.max(0.0);
        self.stamp(center, center, radius, color, move |p| p.distance(center));
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidDimensions);
        }
        self.width = width;
        self.height = height;
        self.data = vec![0; width as usize * height as usize * 4];
        Ok(())
    }
}
