#![deny(unsafe_code)]
//! Pointer-reactive particle field engine.
//!
//! A field of short line particles laid out on a jittered grid, kept clear
//! of an elliptical region reserved for foreground content. Every frame an
//! influence point (the live pointer, or an autonomous path when nothing is
//! tracked) perturbs nearby particles: they ride a traveling wave, lengthen,
//! and fade toward the accent tone, so the field visually parts around the
//! pointer. All particles additionally sway and pulse on their own, so the
//! field is never static.
//!
//! The engine implements [`driftfield_core::Scene`]; hosts drive it one
//! `advance`/`render` pair per display refresh.

pub mod config;
pub mod engine;
pub mod influence;
pub mod layout;
pub mod particle;

pub use config::{FieldConfig, ParticleStyle};
pub use engine::FieldEngine;
pub use influence::{InfluenceTracker, Mode, PointerEvent};
pub use layout::generate_layout;
pub use particle::{proximity_force, update, Particle};
