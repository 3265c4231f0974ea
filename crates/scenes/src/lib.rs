#![deny(unsafe_code)]
//! Scene registry, CPU raster surface, and frame-loop player.
//!
//! This crate sits between `driftfield-core` (which defines the `Scene` and
//! `Surface` traits) and the scene crates (`driftfield-field`, plus any
//! companion backdrops). Hosts depend on this crate for name-based scene
//! construction and a ready-made drawing target.

pub mod player;
pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

use driftfield_core::{Scene, SceneError, Surface};
use driftfield_field::FieldEngine;
use serde_json::Value;

/// All available scene names.
const SCENE_NAMES: &[&str] = &["field"];

/// Enumeration of all available backdrop scenes.
///
/// Wraps each scene implementation and delegates `Scene` trait methods.
/// Use [`SceneKind::from_name`] for string-based construction (CLI, hosts).
pub enum SceneKind {
    /// Pointer-reactive particle field.
    Field(FieldEngine),
}

impl SceneKind {
    /// Constructs a scene by name.
    ///
    /// Returns `SceneError::UnknownScene` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: f64,
        height: f64,
        seed: u64,
        params: &Value,
    ) -> Result<Self, SceneError> {
        match name {
            "field" => Ok(SceneKind::Field(FieldEngine::from_json(
                width, height, seed, params,
            )?)),
            _ => Err(SceneError::UnknownScene(name.to_string())),
        }
    }

    /// Returns a slice of all recognized scene names.
    pub fn list_scenes() -> &'static [&'static str] {
        SCENE_NAMES
    }
}

impl Scene for SceneKind {
    fn advance(&mut self, t: f64) {
        match self {
            SceneKind::Field(s) => s.advance(t),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            SceneKind::Field(s) => s.render(surface),
        }
    }

    fn resize(&mut self, width: f64, height: f64) -> Result<(), SceneError> {
        match self {
            SceneKind::Field(s) => s.resize(width, height),
        }
    }

    fn pointer_moved(&mut self, x: f64, y: f64) {
        match self {
            SceneKind::Field(s) => s.pointer_moved(x, y),
        }
    }

    fn pointer_left(&mut self) {
        match self {
            SceneKind::Field(s) => s.pointer_left(),
        }
    }

    fn params(&self) -> Value {
        match self {
            SceneKind::Field(s) => s.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            SceneKind::Field(s) => s.param_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterSurface;
    use serde_json::json;

    #[test]
    fn from_name_field_succeeds() {
        let scene = SceneKind::from_name("field", 800.0, 600.0, 42, &json!({}));
        assert!(scene.is_ok());
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = SceneKind::from_name("snowfall", 800.0, 600.0, 42, &json!({}));
        assert!(matches!(result, Err(SceneError::UnknownScene(_))));
    }

    #[test]
    fn from_name_propagates_config_errors() {
        let result = SceneKind::from_name("field", 800.0, 600.0, 42, &json!({"grid_pitch": -1.0}));
        assert!(matches!(result, Err(SceneError::InvalidConfig { .. })));
    }

    #[test]
    fn list_scenes_includes_field() {
        assert!(SceneKind::list_scenes().contains(&"field"));
    }

    #[test]
    fn trait_delegation_advance_and_render() {
        let mut scene = SceneKind::from_name("field", 800.0, 600.0, 42, &json!({})).unwrap();
        let mut surface = RasterSurface::new(800, 600).unwrap();
        scene.advance(0.016);
        scene.render(&mut surface);
        let schema = scene.param_schema();
        assert!(schema.get("grid_pitch").is_some());
    }

    #[test]
    fn trait_delegation_pointer_and_resize() {
        let mut scene = SceneKind::from_name("field", 800.0, 600.0, 42, &json!({})).unwrap();
        scene.pointer_moved(100.0, 100.0);
        scene.pointer_left();
        scene.advance(0.016);
        assert!(scene.resize(400.0, 300.0).is_ok());
    }

    #[test]
    fn determinism_same_seed_renders_identically() {
        let params = json!({"exclusion_radius_x": 100.0, "exclusion_radius_y": 80.0});
        let mut a = SceneKind::from_name("field", 320.0, 240.0, 99, &params).unwrap();
        let mut b = SceneKind::from_name("field", 320.0, 240.0, 99, &params).unwrap();
        let mut surf_a = RasterSurface::new(320, 240).unwrap();
        let mut surf_b = RasterSurface::new(320, 240).unwrap();
        for i in 0..5 {
            let t = i as f64 / 60.0;
            a.advance(t);
            b.advance(t);
        }
        a.render(&mut surf_a);
        b.render(&mut surf_b);
        assert_eq!(surf_a.data(), surf_b.data());
    }

    #[test]
    fn object_safety() {
        let scene = SceneKind::from_name("field", 800.0, 600.0, 42, &json!({})).unwrap();
        let boxed: Box<dyn Scene> = Box::new(scene);
        assert!(boxed.params().get("grid_pitch").is_some());
    }
}
