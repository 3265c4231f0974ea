//! Particle state and the per-frame update rule.
//!
//! A particle is a plain data record; [`update`] is a pure transform from
//! `(particle, influence point, time, config)` to the next state, so the
//! physics is testable without an engine or a surface. The engine applies
//! it to every particle once per frame.

use crate::config::FieldConfig;
use driftfield_core::Rgba;
use glam::DVec2;

/// One element of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Fixed anchor, set at layout time. Immutable until the next layout.
    pub origin: DVec2,
    /// Current drawn location; origin plus sway plus wave displacement.
    pub position: DVec2,
    /// Fixed angle from the origin toward the field center, radians.
    pub orientation: f64,
    /// Current visual extent: line length, or dot diameter. Never negative.
    pub length: f64,
    /// Current tone.
    pub color: Rgba,
}

impl Particle {
    /// Creates a resting particle anchored at `origin`, oriented toward
    /// `center`.
    pub fn anchored(origin: DVec2, center: DVec2, config: &FieldConfig) -> Self {
        let toward = center - origin;
        Self {
            origin,
            position: origin,
            orientation: toward.y.atan2(toward.x),
            length: config.base_length,
            color: config.neutral,
        }
    }

    /// The far endpoint of the particle's line segment.
    pub fn tip(&self) -> DVec2 {
        self.position + DVec2::from_angle(self.orientation) * self.length
    }
}

/// Normalized proximity weight of a point at `dist` from the influence
/// point: 1 at zero distance, falling linearly to 0 at `radius`, and
/// exactly 0 at and beyond it (the boundary counts as outside).
pub fn proximity_force(dist: f64, radius: f64) -> f64 {
    if dist < radius {
        (radius - dist) / radius
    } else {
        0.0
    }
}

/// Advances one particle to time `t` against the current influence point.
///
/// Always applied, regardless of proximity:
/// - a slow sway, phase-shifted by the origin so neighbors desynchronize;
/// - a length pulse around the base length, clamped non-negative.
///
/// Within the influence radius, scaled by [`proximity_force`]:
/// - a traveling wave displaces the particle vertically;
/// - the length grows by up to the configured boost;
/// - the tone shifts toward the accent and fades out, strongest at the
///   influence point, so the field parts around it rather than
///   highlighting under it.
///
/// Outside the radius the tone is the neutral resting color.
pub fn update(particle: &Particle, influence: DVec2, t: f64, config: &FieldConfig) -> Particle {
    let origin = particle.origin;

    let sway_phase = t * config.drift_frequency;
    let drift = DVec2::new(
        (sway_phase + origin.y * config.drift_phase_scale).sin(),
        (sway_phase + origin.x * config.drift_phase_scale).cos(),
    ) * config.drift_amplitude;
    let mut position = origin + drift;

    let pulse =
        (t * config.pulse_frequency + (origin.x + origin.y) * config.pulse_phase_scale).sin();
    let mut length = config.base_length * (1.0 + pulse * config.pulse_scale);

    let dist = influence.distance(origin);
    let force = proximity_force(dist, config.influence_radius);
    let color = if force > 0.0 {
        let wave = (dist * config.wave_number - t * config.wave_frequency).sin();
        position.y += wave * config.max_amplitude * force;
        length += force * config.length_boost;
        let alpha = (1.0 - force * config.fade_steepness).max(0.0);
        config
            .neutral
            .mix(config.accent, force)
            .with_alpha(alpha)
    } else {
        config.neutral
    };

    Particle {
        origin,
        position,
        orientation: particle.orientation,
        length: length.max(0.0),
        color,
    }
}
