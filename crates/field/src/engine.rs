//! The `FieldEngine`: owns the particle set, influence tracking, and
//! parallax state for one surface, and implements [`Scene`].
//!
//! One engine per surface instance; all configuration is injected at
//! construction. Pointer notifications only enqueue commands; every
//! mutation of visual state happens inside `advance`.

use crate::config::{FieldConfig, ParticleStyle};
use crate::influence::{InfluenceTracker, PointerEvent};
use crate::layout::generate_layout;
use crate::particle::{self, Particle};
use driftfield_core::{Scene, SceneError, Surface, Xorshift64};
use glam::DVec2;
use serde_json::Value;

/// Pointer-reactive particle field over one viewport.
#[derive(Debug)]
pub struct FieldEngine {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    influence: InfluenceTracker,
    parallax: DVec2,
    rng: Xorshift64,
}

impl FieldEngine {
    /// Creates an engine and generates the initial layout.
    ///
    /// Returns `SceneError::InvalidConfig` for degenerate configuration
    /// values and `SceneError::InvalidDimensions` for a non-positive or
    /// non-finite viewport.
    pub fn new(
        config: FieldConfig,
        width: f64,
        height: f64,
        seed: u64,
    ) -> Result<Self, SceneError> {
        config.validate()?;
        check_dimensions(width, height)?;
        let mut rng = Xorshift64::new(seed);
        let particles = generate_layout(&config, width, height, &mut rng);
        let influence = InfluenceTracker::new(&config, width, height);
        Ok(Self {
            config,
            width,
            height,
            particles,
            influence,
            parallax: DVec2::ZERO,
            rng,
        })
    }

    /// Creates an engine from a JSON params object, falling back to
    /// defaults for missing keys.
    pub fn from_json(
        width: f64,
        height: f64,
        seed: u64,
        params: &Value,
    ) -> Result<Self, SceneError> {
        Self::new(FieldConfig::from_json(params), width, height, seed)
    }

    /// Read-only access to the live particle set.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Read-only access to the influence tracker.
    pub fn influence(&self) -> &InfluenceTracker {
        &self.influence
    }

    /// Current smoothed parallax offset applied at draw time.
    pub fn parallax(&self) -> DVec2 {
        self.parallax
    }

    /// The active configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Viewport dimensions the layout was generated for.
    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

impl Scene for FieldEngine {
    fn advance(&mut self, t: f64) {
        self.influence.drain();
        let influence = self.influence.current(t);

        // Smooth follow opposite the influence point's offset from center;
        // eases back to zero while nothing is tracked.
        let target = if self.influence.engaged() {
            -(influence - DVec2::new(self.width, self.height) / 2.0) * self.config.parallax_strength
        } else {
            DVec2::ZERO
        };
        self.parallax += (target - self.parallax) * self.config.parallax_smoothing;

        for p in &mut self.particles {
            *p = particle::update(p, influence, t, &self.config);
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.config.background);
        for p in &self.particles {
            let position = p.position + self.parallax;
            match self.config.style {
                ParticleStyle::Lines => {
                    let tip = position + DVec2::from_angle(p.orientation) * p.length;
                    surface.draw_line(position, tip, p.color, self.config.line_width);
                }
                ParticleStyle::Dots => {
                    surface.draw_point(position, p.length / 2.0, p.color);
                }
            }
        }
    }

    fn resize(&mut self, width: f64, height: f64) -> Result<(), SceneError> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.influence.set_viewport(width, height);
        // Full teardown and rebuild; exclusion radii stay the configured
        // pixel constants.
        self.particles = generate_layout(&self.config, width, height, &mut self.rng);
        Ok(())
    }

    fn pointer_moved(&mut self, x: f64, y: f64) {
        self.influence.push(PointerEvent::Moved(DVec2::new(x, y)));
    }

    fn pointer_left(&mut self) {
        self.influence.push(PointerEvent::Left);
    }

    fn params(&self) -> Value {
        self.config.to_json()
    }

    fn param_schema(&self) -> Value {
        FieldConfig::schema()
    }
}

fn check_dimensions(width: f64, height: f64) -> Result<(), SceneError> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(SceneError::InvalidDimensions);
    }
    Ok(())
}
