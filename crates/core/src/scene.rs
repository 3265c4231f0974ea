//! The core `Scene` trait that every animated backdrop implements.
//!
//! The trait is object-safe so backdrops can be held as `dyn Scene` and
//! switched at runtime by the registry.

use crate::error::SceneError;
use crate::surface::Surface;
use serde_json::Value;

/// One animated backdrop: updated to a point in time, then drawn.
///
/// The host drives a scene cooperatively — one `advance`/`render` pair per
/// display refresh, with `t` the elapsed seconds since the scene started.
/// Pointer notifications only enqueue state inside the scene; all mutation
/// of visual state happens in `advance`, so event delivery can interleave
/// with the frame callback without tearing a frame's view of the input.
///
/// This trait is **object-safe**: `Box<dyn Scene>` and `&dyn Scene` work.
pub trait Scene {
    /// Advance the animation to absolute time `t` (seconds).
    ///
    /// Drains any queued pointer events first, then updates all visual
    /// state. Per-frame arithmetic is total; this cannot fail.
    fn advance(&mut self, t: f64);

    /// Draw the current state into `surface`, clearing it first.
    fn render(&self, surface: &mut dyn Surface);

    /// React to a viewport resize by rebuilding size-dependent state.
    ///
    /// Returns `SceneError::InvalidDimensions` for non-positive or
    /// non-finite dimensions.
    fn resize(&mut self, width: f64, height: f64) -> Result<(), SceneError>;

    /// The pointer moved over the tracked surface, in surface coordinates.
    ///
    /// Default no-op: scenes that don't react to the pointer ignore it.
    fn pointer_moved(&mut self, x: f64, y: f64) {
        let _ = (x, y);
    }

    /// The pointer left the tracked surface.
    ///
    /// Default no-op, as for [`Scene::pointer_moved`].
    fn pointer_left(&mut self) {}

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use glam::DVec2;
    use serde_json::json;

    /// Minimal scene used to verify trait object safety and defaults.
    struct MockScene {
        advanced_to: f64,
        renders: usize,
        size: (f64, f64),
    }

    impl MockScene {
        fn new() -> Self {
            Self {
                advanced_to: 0.0,
                renders: 0,
                size: (640.0, 480.0),
            }
        }
    }

    impl Scene for MockScene {
        fn advance(&mut self, t: f64) {
            self.advanced_to = t;
        }

        fn render(&self, _surface: &mut dyn Surface) {}

        fn resize(&mut self, width: f64, height: f64) -> Result<(), SceneError> {
            if width <= 0.0 || height <= 0.0 {
                return Err(SceneError::InvalidDimensions);
            }
            self.size = (width, height);
            Ok(())
        }

        fn params(&self) -> Value {
            json!({"renders": self.renders})
        }

        fn param_schema(&self) -> Value {
            json!({
                "renders": {
                    "type": "integer",
                    "default": 0,
                    "description": "Number of render calls"
                }
            })
        }
    }

    /// Surface stub for exercising `render` through a trait object.
    struct NullSurface;

    impl Surface for NullSurface {
        fn width(&self) -> u32 {
            640
        }
        fn height(&self) -> u32 {
            480
        }
        fn clear(&mut self, _color: Rgba) {}
        fn draw_line(&mut self, _from: DVec2, _to: DVec2, _color: Rgba, _width: f64) {}
        fn draw_point(&mut self, _center: DVec2, _radius: f64, _color: Rgba) {}
        fn resize(&mut self, _width: u32, _height: u32) -> Result<(), SceneError> {
            Ok(())
        }
    }

    #[test]
    fn scene_trait_is_object_safe() {
        // If the trait were not object-safe, this would fail to compile.
        let mut scene: Box<dyn Scene> = Box::new(MockScene::new());
        scene.advance(1.5);
        scene.render(&mut NullSurface);
        assert_eq!(scene.params()["renders"], 0);
    }

    #[test]
    fn default_pointer_hooks_are_no_ops() {
        let mut scene = MockScene::new();
        scene.pointer_moved(10.0, 20.0);
        scene.pointer_left();
        assert_eq!(scene.advanced_to, 0.0);
    }

    #[test]
    fn resize_rejects_non_positive_dimensions() {
        let mut scene = MockScene::new();
        assert!(scene.resize(0.0, 100.0).is_err());
        assert!(scene.resize(100.0, -1.0).is_err());
        assert!(scene.resize(100.0, 100.0).is_ok());
        assert_eq!(scene.size, (100.0, 100.0));
    }

    #[test]
    fn param_schema_has_expected_structure() {
        let scene = MockScene::new();
        let schema = scene.param_schema();
        assert!(schema.get("renders").is_some());
        assert_eq!(schema["renders"]["type"], "integer");
    }

    #[test]
    fn dyn_scene_mut_reference_works() {
        let mut scene = MockScene::new();
        let scene_ref: &mut dyn Scene = &mut scene;
        scene_ref.advance(2.0);
        assert_eq!(scene.advanced_to, 2.0);
    }
}
