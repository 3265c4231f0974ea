#![deny(unsafe_code)]
//! Core types and traits for the driftfield animated-backdrop system.
//!
//! Provides the `Scene` trait (one animated backdrop), the `Surface` trait
//! (the host's 2D drawing target), the `Rgba` color type, the `Xorshift64`
//! PRNG used for layout jitter, `SceneError`, and parameter helpers.

pub mod color;
pub mod error;
pub mod params;
pub mod prng;
pub mod scene;
pub mod surface;

pub use color::Rgba;
pub use error::SceneError;
pub use prng::Xorshift64;
pub use scene::Scene;
pub use surface::Surface;
