//! PNG snapshots of a [`RasterSurface`].
//!
//! Feature-gated behind `png` (default on) so headless hosts can depend on
//! this crate without pulling in the `image` crate.

use crate::raster::RasterSurface;
use driftfield_core::{SceneError, Surface};
use std::path::Path;

/// Writes the surface's pixels as a PNG image.
///
/// Returns `SceneError::Io` on encode or write failure.
pub fn write_png(surface: &RasterSurface, path: &Path) -> Result<(), SceneError> {
    let img = image::RgbaImage::from_raw(surface.width(), surface.height(), surface.data().to_vec())
        .ok_or_else(|| SceneError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SceneError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftfield_core::Rgba;

    #[test]
    fn write_png_round_trip() {
        let mut surface = RasterSurface::new(16, 8).unwrap();
        surface.clear(Rgba::opaque(1.0, 0x4d as f64 / 255.0, 0.0));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.png");

        write_png(&surface, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 8);
        assert_eq!(img.get_pixel(0, 0).0, [255, 77, 0, 255]);
    }

    #[test]
    fn write_png_to_invalid_path_reports_io_error() {
        let surface = RasterSurface::new(4, 4).unwrap();
        let result = write_png(&surface, Path::new("/nonexistent-dir/field.png"));
        assert!(matches!(result, Err(SceneError::Io(_))));
    }
}
