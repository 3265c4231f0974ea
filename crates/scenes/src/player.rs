//! The `Player`: cooperative frame-loop manager over a scene and surface.
//!
//! The host's display-refresh scheduler calls [`Player::frame`] once per
//! refresh with the elapsed time; the player runs one update/draw pass to
//! completion and hands control back — it never blocks. Pointer events are
//! forwarded to the scene, which only enqueues them; they take effect at
//! the next frame.

use crate::SceneKind;
use driftfield_core::{Scene, SceneError, Surface};

/// Owns one scene and its drawing surface and gates the frame loop.
pub struct Player<S: Surface> {
    scene: SceneKind,
    surface: S,
    running: bool,
}

impl<S: Surface> Player<S> {
    /// Creates a stopped player. Call [`Player::start`] to begin framing.
    pub fn new(scene: SceneKind, surface: S) -> Self {
        Self {
            scene,
            surface,
            running: false,
        }
    }

    /// Marks the loop live; subsequent [`Player::frame`] calls run.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halts the loop. Safe to call repeatedly; frames after a stop are
    /// no-ops. Restarting a stopped player is not supported by hosts.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the loop is live.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one update/draw pass at time `t` (seconds since start).
    ///
    /// Returns `true` if a frame ran, `false` if the player is stopped.
    pub fn frame(&mut self, t: f64) -> bool {
        if !self.running {
            return false;
        }
        self.scene.advance(t);
        self.scene.render(&mut self.surface);
        true
    }

    /// Resizes the surface and rebuilds the scene's size-dependent state.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<(), SceneError> {
        self.surface.resize(width, height)?;
        self.scene.resize(width as f64, height as f64)
    }

    /// Forwards a pointer move to the scene (enqueued, applied next frame).
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.scene.pointer_moved(x, y);
    }

    /// Forwards a pointer leave to the scene.
    pub fn pointer_left(&mut self) {
        self.scene.pointer_left();
    }

    /// The scene under playback.
    pub fn scene(&self) -> &SceneKind {
        &self.scene
    }

    /// The drawing surface (e.g. for snapshotting after a frame).
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
