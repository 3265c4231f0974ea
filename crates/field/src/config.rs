//! Field configuration: layout geometry, motion constants, and palette.
//!
//! All values are validated once at engine construction so that per-frame
//! arithmetic stays total: every divisor (grid pitch, exclusion radii,
//! influence radius) is guaranteed positive afterward.

use driftfield_core::params::{param_bool, param_color, param_f64, param_str};
use driftfield_core::{Rgba, SceneError};
use glam::DVec2;
use serde_json::{json, Value};

/// Default spacing between grid cells, in pixels.
const DEFAULT_GRID_PITCH: f64 = 28.0;
/// Default fraction of a half-cell a candidate may be jittered by.
const DEFAULT_JITTER_FRACTION: f64 = 0.8;
/// Default horizontal half-axis of the central keep-out ellipse.
const DEFAULT_EXCLUSION_RADIUS_X: f64 = 380.0;
/// Default vertical half-axis of the central keep-out ellipse.
const DEFAULT_EXCLUSION_RADIUS_Y: f64 = 220.0;
/// Default radius around the influence point within which particles react.
const DEFAULT_INFLUENCE_RADIUS: f64 = 250.0;
/// Default peak vertical displacement at full proximity.
const DEFAULT_MAX_AMPLITUDE: f64 = 26.0;
/// Default resting line length.
const DEFAULT_BASE_LENGTH: f64 = 8.0;
/// Default pulse contribution as a fraction of the base length.
const DEFAULT_PULSE_SCALE: f64 = 0.35;
/// Default extra length at full proximity.
const DEFAULT_LENGTH_BOOST: f64 = 10.0;
/// Default steepness of the proximity fade (1.0 = fully clear at the point).
const DEFAULT_FADE_STEEPNESS: f64 = 1.0;
/// Default amplitude of the always-on sway, in pixels.
const DEFAULT_DRIFT_AMPLITUDE: f64 = 2.5;
/// Default angular frequency of the sway, rad/s.
const DEFAULT_DRIFT_FREQUENCY: f64 = 0.9;
/// Default spatial phase scale of the sway, rad/px; desynchronizes cells.
const DEFAULT_DRIFT_PHASE_SCALE: f64 = 0.021;
/// Default angular frequency of the length pulse, rad/s.
const DEFAULT_PULSE_FREQUENCY: f64 = 1.7;
/// Default spatial phase scale of the length pulse, rad/px.
const DEFAULT_PULSE_PHASE_SCALE: f64 = 0.011;
/// Default wave number of the traveling wave, rad/px.
const DEFAULT_WAVE_NUMBER: f64 = 0.045;
/// Default angular frequency of the traveling wave, rad/s.
const DEFAULT_WAVE_FREQUENCY: f64 = 3.2;
/// Default angular frequency of the autonomous path, rad/s.
const DEFAULT_PATH_FREQUENCY: f64 = 0.42;
/// Default frequency ratio between the autonomous path's two axes.
///
/// A non-integer ratio traces a Lissajous-like figure with no short period.
const DEFAULT_PATH_AXIS_RATIO: f64 = 1.3;
/// Default stroke width for line particles.
const DEFAULT_LINE_WIDTH: f64 = 1.5;
/// Default parallax strength (field offset per pixel of pointer offset).
const DEFAULT_PARALLAX_STRENGTH: f64 = 0.02;
/// Default per-frame low-pass factor for the parallax follow.
const DEFAULT_PARALLAX_SMOOTHING: f64 = 0.05;
/// Default resting particle tone.
const DEFAULT_NEUTRAL: Rgba = Rgba::opaque(0x2d as f64 / 255.0, 0x2d as f64 / 255.0, 0x2d as f64 / 255.0);
/// Default accent tone blended in near the influence point.
const DEFAULT_ACCENT: Rgba = Rgba::opaque(1.0, 0x4d as f64 / 255.0, 0.0);
/// Default background fill.
const DEFAULT_BACKGROUND: Rgba = Rgba::opaque(1.0, 1.0, 1.0);

/// How each particle is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParticleStyle {
    /// A short line segment oriented toward the field center.
    #[default]
    Lines,
    /// A dot whose radius tracks the particle's visual extent.
    Dots,
}

impl ParticleStyle {
    fn from_str(s: &str) -> Self {
        match s {
            "dots" => ParticleStyle::Dots,
            _ => ParticleStyle::Lines,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ParticleStyle::Lines => "lines",
            ParticleStyle::Dots => "dots",
        }
    }
}

/// Full configuration of a particle field.
///
/// Constant per session; the engine re-derives layout from it on resize.
/// Use [`Default`] for the stock backdrop and [`FieldConfig::validate`]
/// before trusting externally supplied values.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Spacing between grid cells, in pixels.
    pub grid_pitch: f64,
    /// Fraction of a half-cell a candidate may be jittered by, in [0, 1].
    pub jitter_fraction: f64,
    /// Half-axes of the central keep-out ellipse, in pixels.
    ///
    /// Fixed pixel constants: they do not rescale when the viewport does.
    pub exclusion_radii: DVec2,
    /// Radius around the influence point within which particles react.
    pub influence_radius: f64,
    /// Peak vertical displacement at full proximity.
    pub max_amplitude: f64,
    /// Resting line length (or dot diameter).
    pub base_length: f64,
    /// Pulse contribution as a fraction of the base length.
    pub pulse_scale: f64,
    /// Extra length at full proximity.
    pub length_boost: f64,
    /// Steepness of the proximity fade; 1.0 clears particles completely at
    /// the influence point.
    pub fade_steepness: f64,
    /// Amplitude of the always-on sway, in pixels.
    pub drift_amplitude: f64,
    /// Angular frequency of the sway, rad/s.
    pub drift_frequency: f64,
    /// Spatial phase scale of the sway, rad/px.
    pub drift_phase_scale: f64,
    /// Angular frequency of the length pulse, rad/s.
    pub pulse_frequency: f64,
    /// Spatial phase scale of the length pulse, rad/px.
    pub pulse_phase_scale: f64,
    /// Wave number of the traveling wave, rad/px.
    pub wave_number: f64,
    /// Angular frequency of the traveling wave, rad/s.
    pub wave_frequency: f64,
    /// Angular frequency of the autonomous path, rad/s.
    pub path_frequency: f64,
    /// Frequency ratio between the autonomous path's axes.
    pub path_axis_ratio: f64,
    /// Resting particle tone.
    pub neutral: Rgba,
    /// Accent tone blended in near the influence point.
    pub accent: Rgba,
    /// Background fill.
    pub background: Rgba,
    /// Stroke width for line particles.
    pub line_width: f64,
    /// How particles are drawn.
    pub style: ParticleStyle,
    /// Whether the influence point follows the autonomous path when no
    /// pointer is tracked.
    pub idle_motion: bool,
    /// Parallax strength; 0 disables the parallax follow.
    pub parallax_strength: f64,
    /// Per-frame low-pass factor for the parallax follow, in [0, 1].
    pub parallax_smoothing: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            grid_pitch: DEFAULT_GRID_PITCH,
            jitter_fraction: DEFAULT_JITTER_FRACTION,
            exclusion_radii: DVec2::new(DEFAULT_EXCLUSION_RADIUS_X, DEFAULT_EXCLUSION_RADIUS_Y),
            influence_radius: DEFAULT_INFLUENCE_RADIUS,
            max_amplitude: DEFAULT_MAX_AMPLITUDE,
            base_length: DEFAULT_BASE_LENGTH,
            pulse_scale: DEFAULT_PULSE_SCALE,
            length_boost: DEFAULT_LENGTH_BOOST,
            fade_steepness: DEFAULT_FADE_STEEPNESS,
            drift_amplitude: DEFAULT_DRIFT_AMPLITUDE,
            drift_frequency: DEFAULT_DRIFT_FREQUENCY,
            drift_phase_scale: DEFAULT_DRIFT_PHASE_SCALE,
            pulse_frequency: DEFAULT_PULSE_FREQUENCY,
            pulse_phase_scale: DEFAULT_PULSE_PHASE_SCALE,
            wave_number: DEFAULT_WAVE_NUMBER,
            wave_frequency: DEFAULT_WAVE_FREQUENCY,
            path_frequency: DEFAULT_PATH_FREQUENCY,
            path_axis_ratio: DEFAULT_PATH_AXIS_RATIO,
            neutral: DEFAULT_NEUTRAL,
            accent: DEFAULT_ACCENT,
            background: DEFAULT_BACKGROUND,
            line_width: DEFAULT_LINE_WIDTH,
            style: ParticleStyle::default(),
            idle_motion: true,
            parallax_strength: DEFAULT_PARALLAX_STRENGTH,
            parallax_smoothing: DEFAULT_PARALLAX_SMOOTHING,
        }
    }
}

impl FieldConfig {
    /// Extracts a configuration from a JSON object, falling back to
    /// defaults for missing keys. Does not validate; call
    /// [`FieldConfig::validate`] (the engine constructor does).
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        Self {
            grid_pitch: param_f64(params, "grid_pitch", defaults.grid_pitch),
            jitter_fraction: param_f64(params, "jitter_fraction", defaults.jitter_fraction),
            exclusion_radii: DVec2::new(
                param_f64(params, "exclusion_radius_x", defaults.exclusion_radii.x),
                param_f64(params, "exclusion_radius_y", defaults.exclusion_radii.y),
            ),
            influence_radius: param_f64(params, "influence_radius", defaults.influence_radius),
            max_amplitude: param_f64(params, "max_amplitude", defaults.max_amplitude),
            base_length: param_f64(params, "base_length", defaults.base_length),
            pulse_scale: param_f64(params, "pulse_scale", defaults.pulse_scale),
            length_boost: param_f64(params, "length_boost", defaults.length_boost),
            fade_steepness: param_f64(params, "fade_steepness", defaults.fade_steepness),
            drift_amplitude: param_f64(params, "drift_amplitude", defaults.drift_amplitude),
            drift_frequency: param_f64(params, "drift_frequency", defaults.drift_frequency),
            drift_phase_scale: param_f64(params, "drift_phase_scale", defaults.drift_phase_scale),
            pulse_frequency: param_f64(params, "pulse_frequency", defaults.pulse_frequency),
            pulse_phase_scale: param_f64(params, "pulse_phase_scale", defaults.pulse_phase_scale),
            wave_number: param_f64(params, "wave_number", defaults.wave_number),
            wave_frequency: param_f64(params, "wave_frequency", defaults.wave_frequency),
            path_frequency: param_f64(params, "path_frequency", defaults.path_frequency),
            path_axis_ratio: param_f64(params, "path_axis_ratio", defaults.path_axis_ratio),
            neutral: param_color(params, "neutral", defaults.neutral),
            accent: param_color(params, "accent", defaults.accent),
            background: param_color(params, "background", defaults.background),
            line_width: param_f64(params, "line_width", defaults.line_width),
            style: ParticleStyle::from_str(&param_str(params, "style", defaults.style.as_str())),
            idle_motion: param_bool(params, "idle_motion", defaults.idle_motion),
            parallax_strength: param_f64(params, "parallax_strength", defaults.parallax_strength),
            parallax_smoothing: param_f64(
                params,
                "parallax_smoothing",
                defaults.parallax_smoothing,
            ),
        }
    }

    /// Rejects values that would produce degenerate geometry: non-positive
    /// pitch or radii (divisors in the layout and force arithmetic),
    /// out-of-range fractions, negative lengths, non-finite anything.
    pub fn validate(&self) -> Result<(), SceneError> {
        let positive: [(&'static str, f64); 5] = [
            ("grid_pitch", self.grid_pitch),
            ("exclusion_radius_x", self.exclusion_radii.x),
            ("exclusion_radius_y", self.exclusion_radii.y),
            ("influence_radius", self.influence_radius),
            ("line_width", self.line_width),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SceneError::InvalidConfig {
                    name,
                    reason: "must be positive and finite",
                });
            }
        }

        let non_negative: [(&'static str, f64); 6] = [
            ("max_amplitude", self.max_amplitude),
            ("base_length", self.base_length),
            ("length_boost", self.length_boost),
            ("fade_steepness", self.fade_steepness),
            ("drift_amplitude", self.drift_amplitude),
            ("parallax_strength", self.parallax_strength),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::InvalidConfig {
                    name,
                    reason: "must be non-negative and finite",
                });
            }
        }

        let unit_fractions: [(&'static str, f64); 2] = [
            ("jitter_fraction", self.jitter_fraction),
            ("parallax_smoothing", self.parallax_smoothing),
        ];
        for (name, value) in unit_fractions {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SceneError::InvalidConfig {
                    name,
                    reason: "must lie in [0, 1]",
                });
            }
        }

        let finite: [(&'static str, f64); 8] = [
            ("pulse_scale", self.pulse_scale),
            ("drift_frequency", self.drift_frequency),
            ("drift_phase_scale", self.drift_phase_scale),
            ("pulse_frequency", self.pulse_frequency),
            ("pulse_phase_scale", self.pulse_phase_scale),
            ("wave_number", self.wave_number),
            ("wave_frequency", self.wave_frequency),
            ("path_frequency", self.path_frequency),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SceneError::InvalidConfig {
                    name,
                    reason: "must be finite",
                });
            }
        }

        if !self.path_axis_ratio.is_finite() || self.path_axis_ratio <= 0.0 {
            return Err(SceneError::InvalidConfig {
                name: "path_axis_ratio",
                reason: "must be positive and finite",
            });
        }

        Ok(())
    }

    /// Current values as a JSON object (the `Scene::params` payload).
    pub fn to_json(&self) -> Value {
        json!({
            "grid_pitch": self.grid_pitch,
            "jitter_fraction": self.jitter_fraction,
            "exclusion_radius_x": self.exclusion_radii.x,
            "exclusion_radius_y": self.exclusion_radii.y,
            "influence_radius": self.influence_radius,
            "max_amplitude": self.max_amplitude,
            "base_length": self.base_length,
            "pulse_scale": self.pulse_scale,
            "length_boost": self.length_boost,
            "fade_steepness": self.fade_steepness,
            "drift_amplitude": self.drift_amplitude,
            "drift_frequency": self.drift_frequency,
            "drift_phase_scale": self.drift_phase_scale,
            "pulse_frequency": self.pulse_frequency,
            "pulse_phase_scale": self.pulse_phase_scale,
            "wave_number": self.wave_number,
            "wave_frequency": self.wave_frequency,
            "path_frequency": self.path_frequency,
            "path_axis_ratio": self.path_axis_ratio,
            "neutral": self.neutral.to_hex(),
            "accent": self.accent.to_hex(),
            "background": self.background.to_hex(),
            "line_width": self.line_width,
            "style": self.style.as_str(),
            "idle_motion": self.idle_motion,
            "parallax_strength": self.parallax_strength,
            "parallax_smoothing": self.parallax_smoothing,
        })
    }

    /// Parameter schema (the `Scene::param_schema` payload).
    pub fn schema() -> Value {
        json!({
            "grid_pitch": {
                "type": "number",
                "default": DEFAULT_GRID_PITCH,
                "min": 1.0,
                "max": 200.0,
                "description": "Spacing between grid cells in pixels"
            },
            "jitter_fraction": {
                "type": "number",
                "default": DEFAULT_JITTER_FRACTION,
                "min": 0.0,
                "max": 1.0,
                "description": "Fraction of a half-cell a candidate may be jittered by"
            },
            "exclusion_radius_x": {
                "type": "number",
                "default": DEFAULT_EXCLUSION_RADIUS_X,
                "min": 1.0,
                "max": 2000.0,
                "description": "Horizontal half-axis of the central keep-out ellipse"
            },
            "exclusion_radius_y": {
                "type": "number",
                "default": DEFAULT_EXCLUSION_RADIUS_Y,
                "min": 1.0,
                "max": 2000.0,
                "description": "Vertical half-axis of the central keep-out ellipse"
            },
            "influence_radius": {
                "type": "number",
                "default": DEFAULT_INFLUENCE_RADIUS,
                "min": 1.0,
                "max": 2000.0,
                "description": "Radius within which particles react to the influence point"
            },
            "max_amplitude": {
                "type": "number",
                "default": DEFAULT_MAX_AMPLITUDE,
                "min": 0.0,
                "max": 200.0,
                "description": "Peak vertical displacement at full proximity"
            },
            "base_length": {
                "type": "number",
                "default": DEFAULT_BASE_LENGTH,
                "min": 0.0,
                "max": 100.0,
                "description": "Resting line length"
            },
            "pulse_scale": {
                "type": "number",
                "default": DEFAULT_PULSE_SCALE,
                "min": -1.0,
                "max": 1.0,
                "description": "Pulse contribution as a fraction of the base length"
            },
            "length_boost": {
                "type": "number",
                "default": DEFAULT_LENGTH_BOOST,
                "min": 0.0,
                "max": 100.0,
                "description": "Extra length at full proximity"
            },
            "fade_steepness": {
                "type": "number",
                "default": DEFAULT_FADE_STEEPNESS,
                "min": 0.0,
                "max": 4.0,
                "description": "Steepness of the proximity fade"
            },
            "drift_amplitude": {
                "type": "number",
                "default": DEFAULT_DRIFT_AMPLITUDE,
                "min": 0.0,
                "max": 50.0,
                "description": "Amplitude of the always-on sway in pixels"
            },
            "drift_frequency": {
                "type": "number",
                "default": DEFAULT_DRIFT_FREQUENCY,
                "description": "Angular frequency of the sway in rad/s"
            },
            "drift_phase_scale": {
                "type": "number",
                "default": DEFAULT_DRIFT_PHASE_SCALE,
                "description": "Spatial phase scale of the sway in rad/px"
            },
            "pulse_frequency": {
                "type": "number",
                "default": DEFAULT_PULSE_FREQUENCY,
                "description": "Angular frequency of the length pulse in rad/s"
            },
            "pulse_phase_scale": {
                "type": "number",
                "default": DEFAULT_PULSE_PHASE_SCALE,
                "description": "Spatial phase scale of the length pulse in rad/px"
            },
            "wave_number": {
                "type": "number",
                "default": DEFAULT_WAVE_NUMBER,
                "description": "Wave number of the traveling wave in rad/px"
            },
            "wave_frequency": {
                "type": "number",
                "default": DEFAULT_WAVE_FREQUENCY,
                "description": "Angular frequency of the traveling wave in rad/s"
            },
            "path_frequency": {
                "type": "number",
                "default": DEFAULT_PATH_FREQUENCY,
                "description": "Angular frequency of the autonomous path in rad/s"
            },
            "path_axis_ratio": {
                "type": "number",
                "default": DEFAULT_PATH_AXIS_RATIO,
                "min": 0.1,
                "max": 10.0,
                "description": "Frequency ratio between the autonomous path's axes"
            },
            "neutral": {
                "type": "color",
                "default": "#2d2d2d",
                "description": "Resting particle tone"
            },
            "accent": {
                "type": "color",
                "default": "#ff4d00",
                "description": "Accent tone blended in near the influence point"
            },
            "background": {
                "type": "color",
                "default": "#ffffff",
                "description": "Background fill"
            },
            "line_width": {
                "type": "number",
                "default": DEFAULT_LINE_WIDTH,
                "min": 0.5,
                "max": 10.0,
                "description": "Stroke width for line particles"
            },
            "style": {
                "type": "string",
                "default": "lines",
                "values": ["lines", "dots"],
                "description": "How particles are drawn"
            },
            "idle_motion": {
                "type": "boolean",
                "default": true,
                "description": "Follow the autonomous path when no pointer is tracked"
            },
            "parallax_strength": {
                "type": "number",
                "default": DEFAULT_PARALLAX_STRENGTH,
                "min": 0.0,
                "max": 0.2,
                "description": "Field offset per pixel of pointer offset; 0 disables"
            },
            "parallax_smoothing": {
                "type": "number",
                "default": DEFAULT_PARALLAX_SMOOTHING,
                "min": 0.0,
                "max": 1.0,
                "description": "Per-frame low-pass factor for the parallax follow"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config_is_valid() {
        FieldConfig::default().validate().unwrap();
    }

    #[test]
    fn from_json_empty_object_equals_defaults() {
        let cfg = FieldConfig::from_json(&json!({}));
        let defaults = FieldConfig::default();
        assert_eq!(cfg.grid_pitch, defaults.grid_pitch);
        assert_eq!(cfg.exclusion_radii, defaults.exclusion_radii);
        assert_eq!(cfg.neutral, defaults.neutral);
        assert_eq!(cfg.style, defaults.style);
        assert_eq!(cfg.idle_motion, defaults.idle_motion);
    }

    #[test]
    fn from_json_overrides_selected_keys() {
        let cfg = FieldConfig::from_json(&json!({
            "grid_pitch": 80.0,
            "exclusion_radius_x": 380.0,
            "exclusion_radius_y": 220.0,
            "style": "dots",
            "idle_motion": false,
            "accent": "#ffcc00",
        }));
        assert_eq!(cfg.grid_pitch, 80.0);
        assert_eq!(cfg.exclusion_radii, DVec2::new(380.0, 220.0));
        assert_eq!(cfg.style, ParticleStyle::Dots);
        assert!(!cfg.idle_motion);
        assert_eq!(cfg.accent.to_hex(), "#ffcc00");
    }

    #[test]
    fn unknown_style_falls_back_to_lines() {
        let cfg = FieldConfig::from_json(&json!({"style": "sparkles"}));
        assert_eq!(cfg.style, ParticleStyle::Lines);
    }

    #[test]
    fn validate_rejects_non_positive_pitch() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let cfg = FieldConfig {
                grid_pitch: bad,
                ..FieldConfig::default()
            };
            let err = cfg.validate().unwrap_err();
            assert!(
                matches!(err, SceneError::InvalidConfig { name: "grid_pitch", .. }),
                "pitch {bad} gave {err}"
            );
        }
    }

    #[test]
    fn validate_rejects_non_positive_radii() {
        let cfg = FieldConfig {
            exclusion_radii: DVec2::new(380.0, 0.0),
            ..FieldConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            SceneError::InvalidConfig {
                name: "exclusion_radius_y",
                ..
            }
        ));

        let cfg = FieldConfig {
            influence_radius: -1.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            SceneError::InvalidConfig {
                name: "influence_radius",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_jitter() {
        for bad in [-0.1, 1.1] {
            let cfg = FieldConfig {
                jitter_fraction: bad,
                ..FieldConfig::default()
            };
            assert!(cfg.validate().is_err(), "jitter {bad} accepted");
        }
    }

    #[test]
    fn validate_rejects_negative_lengths() {
        let cfg = FieldConfig {
            base_length: -1.0,
            ..FieldConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = FieldConfig {
            length_boost: -1.0,
            ..FieldConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_frequency() {
        let cfg = FieldConfig {
            wave_frequency: f64::NAN,
            ..FieldConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn json_round_trip_preserves_values() {
        let cfg = FieldConfig {
            grid_pitch: 80.0,
            style: ParticleStyle::Dots,
            idle_motion: false,
            ..FieldConfig::default()
        };
        let back = FieldConfig::from_json(&cfg.to_json());
        assert_eq!(back.grid_pitch, cfg.grid_pitch);
        assert_eq!(back.style, cfg.style);
        assert_eq!(back.idle_motion, cfg.idle_motion);
        assert_eq!(back.neutral, cfg.neutral);
        assert_eq!(back.parallax_smoothing, cfg.parallax_smoothing);
    }

    #[test]
    fn schema_covers_every_params_key() {
        let schema = FieldConfig::schema();
        let params = FieldConfig::default().to_json();
        for key in params.as_object().unwrap().keys() {
            assert!(schema.get(key).is_some(), "schema missing key {key}");
        }
    }
}
