//! Click versus drag classification for pointer gestures.
//!
//! A press becomes a drag once it is held too long or the pointer travels
//! too far. Only clicks reach the navigator.

use glam::Vec2;

/// What a completed gesture turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Click,
    Drag,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    start_time: f64,
    last_pos: Vec2,
    // Manhattan travel since the press
    travel: f32,
}

/// Tracks one pointer between press and release.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    max_click_duration: f64,
    drag_threshold: f32,
    press: Option<Press>,
}

impl GestureTracker {
    /// Creates a tracker. `max_click_duration` is in seconds, `drag_threshold` in pixels.
    #[must_use]
    pub fn new(max_click_duration: f32, drag_threshold: f32) -> Self {
        Self {
            max_click_duration: f64::from(max_click_duration),
            drag_threshold,
            press: None,
        }
    }

    /// Starts a click candidate.
    pub fn pointer_down(&mut self, pos: Vec2, time: f64) {
        self.press = Some(Press {
            start_time: time,
            last_pos: pos,
            travel: 0.0,
        });
    }

    /// Records pointer travel and returns the movement since the last event
    /// while the pointer is held.
    pub fn pointer_move(&mut self, pos: Vec2) -> Option<Vec2> {
        let press = self.press.as_mut()?;
        let delta = pos - press.last_pos;
        press.travel += delta.x.abs() + delta.y.abs();
        press.last_pos = pos;
        Some(delta)
    }

    /// Whether the current press has already become a drag at `time`.
    #[must_use]
    pub fn is_dragging(&self, time: f64) -> bool {
        self.press
            .is_some_and(|press| self.exceeds_limits(&press, time))
    }

    /// Ends the gesture. Returns `None` if no press was in progress.
    pub fn pointer_up(&mut self, pos: Vec2, time: f64) -> Option<GestureKind> {
        self.pointer_move(pos);
        let press = self.press.take()?;
        let kind = if self.exceeds_limits(&press, time) {
            GestureKind::Drag
        } else {
            GestureKind::Click
        };
        log::trace!("gesture ended as {kind:?} after {:.3}s", time - press.start_time);
        Some(kind)
    }

    fn exceeds_limits(&self, press: &Press, time: f64) -> bool {
        time - press.start_time > self.max_click_duration || press.travel > self.drag_threshold
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(0.2, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_still_press_is_click() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(Vec2::new(100.0, 100.0), 1.0);
        assert_eq!(
            tracker.pointer_up(Vec2::new(101.0, 100.0), 1.1),
            Some(GestureKind::Click)
        );
    }

    #[test]
    fn test_long_press_is_drag() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(Vec2::ZERO, 1.0);
        assert!(!tracker.is_dragging(1.15));
        assert!(tracker.is_dragging(1.25));
        assert_eq!(tracker.pointer_up(Vec2::ZERO, 1.25), Some(GestureKind::Drag));
    }

    #[test]
    fn test_travel_beyond_threshold_is_drag() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(Vec2::ZERO, 0.0);
        assert_eq!(tracker.pointer_move(Vec2::new(3.0, 0.0)), Some(Vec2::new(3.0, 0.0)));
        // Back to the start: net displacement is zero but travel counts.
        tracker.pointer_move(Vec2::ZERO);
        assert_eq!(tracker.pointer_up(Vec2::ZERO, 0.05), Some(GestureKind::Drag));
    }

    #[test]
    fn test_up_without_down() {
        let mut tracker = GestureTracker::default();
        assert_eq!(tracker.pointer_move(Vec2::ONE), None);
        assert_eq!(tracker.pointer_up(Vec2::ONE, 0.0), None);
    }

    #[test]
    fn test_press_is_consumed() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(Vec2::ZERO, 0.0);
        assert!(tracker.pointer_up(Vec2::ZERO, 0.01).is_some());
        assert!(tracker.pointer_up(Vec2::ZERO, 0.02).is_none());
    }
}
