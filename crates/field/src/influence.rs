//! Influence point resolution: live pointer or autonomous path.
//!
//! Host pointer events arrive asynchronously relative to the frame loop, so
//! they are buffered as commands and applied exactly once per frame, at the
//! start of `advance`. Between drains the tracker's readable state is
//! frozen, so a frame never sees a half-applied input change.

use crate::config::FieldConfig;
use glam::DVec2;

/// Sentinel far outside any plausible viewport: every particle is beyond
/// the influence radius of this point, so nothing is perturbed.
const OFFSCREEN: DVec2 = DVec2::new(-1.0e6, -1.0e6);

/// A buffered pointer notification from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved, in surface coordinates.
    Moved(DVec2),
    /// The pointer left the tracked surface.
    Left,
}

/// Which source the influence point is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A live pointer is tracked; the influence point is its coordinate.
    Interactive,
    /// No pointer is tracked; the influence point follows the autonomous
    /// path (if enabled), or stays offscreen.
    Autonomous,
}

/// Resolves the influence coordinate for each frame.
#[derive(Debug)]
pub struct InfluenceTracker {
    viewport: DVec2,
    pointer: Option<DVec2>,
    mode: Mode,
    queue: Vec<PointerEvent>,
    idle_motion: bool,
    path_frequency: f64,
    path_axis_ratio: f64,
}

impl InfluenceTracker {
    /// Creates a tracker for the given viewport.
    ///
    /// Starts in [`Mode::Autonomous`] with no pointer recorded.
    pub fn new(config: &FieldConfig, width: f64, height: f64) -> Self {
        Self {
            viewport: DVec2::new(width, height),
            pointer: None,
            mode: Mode::Autonomous,
            queue: Vec::new(),
            idle_motion: config.idle_motion,
            path_frequency: config.path_frequency,
            path_axis_ratio: config.path_axis_ratio,
        }
    }

    /// Buffers a pointer event. Called from host event handlers; takes
    /// effect at the next [`InfluenceTracker::drain`].
    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    /// Applies all buffered events in arrival order. Called once per frame
    /// before any particle reads the influence point.
    pub fn drain(&mut self) {
        for event in self.queue.drain(..) {
            match event {
                PointerEvent::Moved(position) => {
                    self.pointer = Some(position);
                    self.mode = Mode::Interactive;
                }
                // Keeps the last pointer coordinate; only the read path
                // switches back to the autonomous source.
                PointerEvent::Left => self.mode = Mode::Autonomous,
            }
        }
    }

    /// The influence coordinate at time `t` (seconds since scene start).
    ///
    /// Interactive mode returns the last pointer coordinate verbatim.
    /// Autonomous mode traces the configured path; with idle motion
    /// disabled, or before any input has ever arrived, it returns a point
    /// far offscreen so no particle reacts.
    pub fn current(&self, t: f64) -> DVec2 {
        match (self.mode, self.pointer) {
            (Mode::Interactive, Some(position)) => position,
            _ if self.idle_motion => self.autonomous_path(t),
            _ => OFFSCREEN,
        }
    }

    /// True once the influence point is something other than the offscreen
    /// sentinel: a tracked pointer, or a live autonomous path.
    pub fn engaged(&self) -> bool {
        self.idle_motion || matches!((self.mode, self.pointer), (Mode::Interactive, Some(_)))
    }

    /// Current read mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last observed pointer coordinate, if any.
    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    /// Updates the viewport the autonomous path spans.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = DVec2::new(width, height);
    }

    /// The autonomous path: independent oscillations per axis whose
    /// frequency ratio is non-integer, tracing a Lissajous-like figure
    /// with no short repeat, spanning the middle two-thirds of each axis.
    fn autonomous_path(&self, t: f64) -> DVec2 {
        let phase = t * self.path_frequency;
        DVec2::new(
            self.viewport.x / 2.0 + (phase).sin() * (self.viewport.x / 3.0),
            self.viewport.y / 2.0 + (phase * self.path_axis_ratio).cos() * (self.viewport.y / 3.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(idle_motion: bool) -> InfluenceTracker {
        let config = FieldConfig {
            idle_motion,
            ..FieldConfig::default()
        };
        InfluenceTracker::new(&config, 800.0, 600.0)
    }

    #[test]
    fn starts_autonomous_with_no_pointer() {
        let tracker = tracker(true);
        assert_eq!(tracker.mode(), Mode::Autonomous);
        assert_eq!(tracker.pointer(), None);
    }

    #[test]
    fn without_idle_motion_and_input_the_point_is_offscreen() {
        let tracker = tracker(false);
        let point = tracker.current(0.0);
        assert!(
            point.x < -1000.0 && point.y < -1000.0,
            "expected an offscreen sentinel, got {point:?}"
        );
        assert!(!tracker.engaged());
    }

    #[test]
    fn move_event_switches_to_interactive_and_returns_exact_coordinate() {
        let mut tracker = tracker(true);
        tracker.push(PointerEvent::Moved(DVec2::new(120.0, 80.0)));
        tracker.drain();
        assert_eq!(tracker.mode(), Mode::Interactive);
        assert_eq!(tracker.current(3.5), DVec2::new(120.0, 80.0));
        assert_eq!(tracker.current(99.0), DVec2::new(120.0, 80.0));
    }

    #[test]
    fn leave_event_switches_to_autonomous_path_not_stale_pointer() {
        let mut tracker = tracker(true);
        tracker.push(PointerEvent::Moved(DVec2::new(120.0, 80.0)));
        tracker.drain();
        tracker.push(PointerEvent::Left);
        tracker.drain();
        assert_eq!(tracker.mode(), Mode::Autonomous);
        let t = 5.0_f64;
        let expected = DVec2::new(
            400.0 + (t * 0.42).sin() * (800.0 / 3.0),
            300.0 + (t * 0.42 * 1.3).cos() * (600.0 / 3.0),
        );
        let got = tracker.current(t);
        assert!(
            got.distance(expected) < 1e-9,
            "expected path point {expected:?}, got {got:?}"
        );
        assert_ne!(got, DVec2::new(120.0, 80.0));
        // The pointer coordinate is retained, only the read path changed.
        assert_eq!(tracker.pointer(), Some(DVec2::new(120.0, 80.0)));
    }

    #[test]
    fn leave_without_idle_motion_goes_offscreen() {
        let mut tracker = tracker(false);
        tracker.push(PointerEvent::Moved(DVec2::new(10.0, 10.0)));
        tracker.drain();
        tracker.push(PointerEvent::Left);
        tracker.drain();
        let point = tracker.current(1.0);
        assert!(point.x < -1000.0, "expected offscreen, got {point:?}");
    }

    #[test]
    fn events_take_effect_only_after_drain() {
        let mut tracker = tracker(false);
        tracker.push(PointerEvent::Moved(DVec2::new(50.0, 60.0)));
        // Not drained yet: still idle and offscreen.
        assert_eq!(tracker.mode(), Mode::Autonomous);
        assert!(tracker.current(0.5).x < -1000.0);
        tracker.drain();
        assert_eq!(tracker.mode(), Mode::Interactive);
        assert_eq!(tracker.current(0.5), DVec2::new(50.0, 60.0));
    }

    #[test]
    fn drain_applies_events_in_arrival_order() {
        let mut tracker = tracker(true);
        tracker.push(PointerEvent::Moved(DVec2::new(1.0, 1.0)));
        tracker.push(PointerEvent::Left);
        tracker.push(PointerEvent::Moved(DVec2::new(2.0, 2.0)));
        tracker.drain();
        // The last move wins over the intervening leave.
        assert_eq!(tracker.mode(), Mode::Interactive);
        assert_eq!(tracker.current(0.0), DVec2::new(2.0, 2.0));
    }

    #[test]
    fn autonomous_path_stays_within_its_band() {
        let tracker = tracker(true);
        for i in 0..500 {
            let t = i as f64 * 0.1;
            let p = tracker.current(t);
            assert!(
                (400.0 - 800.0 / 3.0..=400.0 + 800.0 / 3.0).contains(&p.x),
                "x = {} out of band at t = {t}",
                p.x
            );
            assert!(
                (300.0 - 600.0 / 3.0..=300.0 + 600.0 / 3.0).contains(&p.y),
                "y = {} out of band at t = {t}",
                p.y
            );
        }
    }

    #[test]
    fn autonomous_path_moves_over_time() {
        let tracker = tracker(true);
        let a = tracker.current(0.0);
        let b = tracker.current(1.0);
        assert!(a.distance(b) > 1.0, "path barely moved: {a:?} -> {b:?}");
    }

    #[test]
    fn set_viewport_rescales_the_path() {
        let mut tracker = tracker(true);
        tracker.set_viewport(1600.0, 1200.0);
        let p = tracker.current(0.0);
        // sin(0) = 0, cos(0) = 1.
        assert!((p.x - 800.0).abs() < 1e-9);
        assert!((p.y - (600.0 + 400.0)).abs() < 1e-9);
    }

    #[test]
    fn engaged_after_pointer_even_when_idle_motion_is_off() {
        let mut tracker = tracker(false);
        assert!(!tracker.engaged());
        tracker.push(PointerEvent::Moved(DVec2::new(5.0, 5.0)));
        tracker.drain();
        assert!(tracker.engaged());
    }
}
