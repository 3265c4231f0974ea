//! Layout generation: a jittered grid with an elliptical keep-out region.
//!
//! Runs once at engine construction and again on every resize. Pure except
//! for the PRNG argument; the caller owns replacing the active particle set.

use crate::config::FieldConfig;
use crate::particle::Particle;
use driftfield_core::Xorshift64;
use glam::DVec2;

/// Generates the particle set for a `width x height` viewport.
///
/// Cells cover the viewport at the configured pitch, centered so partial
/// cells split evenly between opposite edges. Each cell yields one
/// candidate at its center plus a bounded random jitter; candidates inside
/// the keep-out ellipse are rejected. Small viewports may legitimately
/// yield no particles at all.
pub fn generate_layout(
    config: &FieldConfig,
    width: f64,
    height: f64,
    rng: &mut Xorshift64,
) -> Vec<Particle> {
    let pitch = config.grid_pitch;
    let cols = (width / pitch).ceil().max(0.0) as usize;
    let rows = (height / pitch).ceil().max(0.0) as usize;
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let center = DVec2::new(width, height) / 2.0;
    // The grid spans (cols-1) * pitch; center that span in the viewport.
    let offset = DVec2::new(
        (width - (cols - 1) as f64 * pitch) / 2.0,
        (height - (rows - 1) as f64 * pitch) / 2.0,
    );
    let half_jitter = config.jitter_fraction * pitch / 2.0;

    let mut particles = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let cell = offset + DVec2::new(col as f64, row as f64) * pitch;
            let candidate = cell
                + DVec2::new(
                    rng.next_symmetric(half_jitter),
                    rng.next_symmetric(half_jitter),
                );
            if outside_exclusion(candidate, center, config.exclusion_radii) {
                particles.push(Particle::anchored(candidate, center, config));
            }
        }
    }
    particles
}

/// Strict ellipse-exterior test: true iff `point` lies outside the ellipse
/// at `center` with half-axes `radii`. Points exactly on the boundary count
/// as inside (rejected), keeping the accepted set strictly clear of the
/// reserved region.
pub fn outside_exclusion(point: DVec2, center: DVec2, radii: DVec2) -> bool {
    let d = point - center;
    let nx = d.x / radii.x;
    let ny = d.y / radii.y;
    nx * nx + ny * ny > 1.0
}
