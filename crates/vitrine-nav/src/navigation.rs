//! Click-to-focus camera navigation.
//!
//! The navigator is either idle or flying the camera between two positions.
//! Selecting an object flies to a close-up in front of it, selecting the same
//! object again flies back, and clicking the floor walks towards the click.
//! A new request always replaces the flight in progress, starting from
//! wherever the camera currently is.

use glam::{Vec2, Vec3};
use vitrine_core::{FocusId, FocusTarget, NavigationOptions, PickHit};

use crate::camera::CameraPose;

/// An in-flight camera move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Vec3,
    pub to: Vec3,
    /// Seconds, on the caller's clock.
    pub start_time: f64,
    pub duration: f32,
    /// Look-at target applied when the flight ends.
    pub pending_look_at: Option<Vec3>,
}

impl Transition {
    /// Interpolation parameter at `now`, clamped to 0..=1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - self.start_time) as f32;
        (elapsed / self.duration).clamp(0.0, 1.0)
    }
}

/// Navigator state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NavState {
    /// The camera rests at the current pose.
    #[default]
    Idle,
    Transitioning(Transition),
}

/// What a request made the navigator do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    /// Flying to a close-up of the object.
    Focus(FocusId),
    /// Flying back from the object to the pose held before it was focused.
    Return(FocusId),
    /// Walking towards a floor point.
    FloorMove(Vec3),
}

/// The camera navigation state machine.
#[derive(Debug, Clone)]
pub struct Navigator {
    options: NavigationOptions,
    wall_width: f32,
    pose: CameraPose,
    state: NavState,
    focused: Option<FocusId>,
    return_pose: Option<CameraPose>,
}

impl Navigator {
    /// Creates an idle navigator at `initial`.
    #[must_use]
    pub fn new(initial: CameraPose, wall_width: f32, options: NavigationOptions) -> Self {
        Self {
            options,
            wall_width,
            pose: initial,
            state: NavState::Idle,
            focused: None,
            return_pose: None,
        }
    }

    /// The current camera pose.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, NavState::Transitioning(_))
    }

    /// The object the camera is focused on (or flying to).
    pub fn focused(&self) -> Option<FocusId> {
        self.focused
    }

    /// The pose a return flight would restore.
    pub fn return_pose(&self) -> Option<CameraPose> {
        self.return_pose
    }

    pub fn options(&self) -> &NavigationOptions {
        &self.options
    }

    /// Dispatches a click: objects are selected, floor hits walk, misses do nothing.
    pub fn handle_click(&mut self, hit: Option<PickHit>, now: f64) -> Option<NavAction> {
        match hit? {
            PickHit::Focusable(target) => Some(self.select(target, now)),
            PickHit::Floor(point) => self
                .floor_move(point, now)
                .then_some(NavAction::FloorMove(point)),
        }
    }

    /// Focuses `target`, or returns if it is already the focused object.
    pub fn select(&mut self, target: FocusTarget, now: f64) -> NavAction {
        if self.focused == Some(target.id) && self.return_to_previous(now) {
            return NavAction::Return(target.id);
        }
        self.focus(target, now);
        NavAction::Focus(target.id)
    }

    /// Flies to a close-up of `target`, remembering the current pose for the way back.
    ///
    /// When this interrupts a return flight, the remembered pose takes the
    /// look-at target that flight was heading for.
    pub fn focus(&mut self, target: FocusTarget, now: f64) {
        self.update(now);

        let mut destination =
            target.center + target.normal * target.focus_distance(self.options.focus_distance_factor);
        destination.y = self.pose.position.y;

        let mut departing = self.pose;
        if let NavState::Transitioning(Transition {
            pending_look_at: Some(look_at),
            ..
        }) = self.state
        {
            departing.look_at = look_at;
        }

        self.return_pose = Some(departing);
        self.focused = Some(target.id);
        self.pose.look_at = target.center;
        log::trace!("focus {:?}: {:?} -> {:?}", target.id, self.pose.position, destination);
        self.begin(destination, None, now);
    }

    /// Flies back to the pose held before the last focus.
    ///
    /// The camera keeps looking at the object it is leaving until it arrives,
    /// then switches to the restored look-at target. Returns `false` when
    /// there is nothing to return to.
    pub fn return_to_previous(&mut self, now: f64) -> bool {
        let Some(previous) = self.return_pose.take() else {
            return false;
        };
        self.update(now);

        self.focused = None;
        log::trace!("return: {:?} -> {:?}", self.pose.position, previous.position);
        self.begin(previous.position, Some(previous.look_at), now);
        true
    }

    /// Walks towards a floor point, stopping a little short of it.
    ///
    /// The camera never backs away from a point closer than the backoff
    /// distance. Points closer than the floor margin to a wall are ignored
    /// and `false` is returned.
    pub fn floor_move(&mut self, point: Vec3, now: f64) -> bool {
        let limit = self.wall_width * 0.5 - self.options.floor_margin;
        if point.x.abs() > limit || point.z.abs() > limit {
            log::trace!("floor click {point:?} outside walkable area");
            return false;
        }
        self.update(now);

        let height = self.pose.position.y;
        let above = Vec3::new(point.x, height, point.z);
        let to_point = above - self.pose.position;
        let backoff = self.options.floor_backoff.min(to_point.length());
        let destination = above - to_point.normalize_or_zero() * backoff;

        self.focused = None;
        self.return_pose = None;
        self.pose.look_at = point;
        log::trace!("floor move: {:?} -> {:?}", self.pose.position, destination);
        self.begin(destination, None, now);
        true
    }

    /// Orbits the camera for a pointer drag. Ignored during a flight.
    pub fn orbit(&mut self, delta: Vec2) {
        if self.is_transitioning() {
            return;
        }
        self.pose.orbit(delta.x * ORBIT_SPEED, delta.y * ORBIT_SPEED);
    }

    /// Advances the flight in progress. Returns whether the pose changed.
    ///
    /// Without a flight in progress this does nothing.
    pub fn update(&mut self, now: f64) -> bool {
        let NavState::Transitioning(transition) = self.state else {
            return false;
        };

        let t = transition.progress(now);
        if t >= 1.0 {
            self.pose.position = transition.to;
            if let Some(look_at) = transition.pending_look_at {
                self.pose.look_at = look_at;
            }
            self.state = NavState::Idle;
        } else {
            self.pose.position = transition.from.lerp(transition.to, t);
        }
        true
    }

    fn begin(&mut self, to: Vec3, pending_look_at: Option<Vec3>, now: f64) {
        self.state = NavState::Transitioning(Transition {
            from: self.pose.position,
            to,
            start_time: now,
            duration: self.options.transition_duration,
            pending_look_at,
        });
    }
}

/// Radians of orbit per pixel of drag.
const ORBIT_SPEED: f32 = 0.005;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    fn navigator() -> Navigator {
        Navigator::new(
            CameraPose::overview(12.0, 1.6),
            12.0,
            NavigationOptions::default(),
        )
    }

    fn painting(index: usize, x: f32) -> FocusTarget {
        FocusTarget::new(
            FocusId::Exhibit(index),
            Vec3::new(x, 2.0, -5.97),
            Vec3::Z,
            Vec2::new(2.0, 1.0),
        )
    }

    #[test]
    fn test_update_without_transition_is_noop() {
        let mut nav = navigator();
        let before = nav.pose();
        assert!(!nav.update(5.0));
        assert!(!nav.update(5.0));
        assert_eq!(nav.pose(), before);
        assert_eq!(*nav.state(), NavState::Idle);
    }

    #[test]
    fn test_focus_flies_in_front_of_target() {
        let mut nav = navigator();
        let target = painting(0, 1.0);
        assert_eq!(nav.select(target, 0.0), NavAction::Focus(FocusId::Exhibit(0)));

        // look-at switches immediately
        assert_eq!(nav.pose().look_at, target.center);
        assert!(nav.is_transitioning());

        nav.update(0.3);
        let mid = nav.pose().position;
        assert!(mid.z < 4.5 && mid.z > -5.97 + 3.0);

        nav.update(0.6);
        assert!(!nav.is_transitioning());
        // 1.5 * max(2, 1) in front of the panel, at eye height
        assert!(nav.pose().position.abs_diff_eq(Vec3::new(1.0, 1.6, -2.97), EPS));
        assert_eq!(nav.focused(), Some(FocusId::Exhibit(0)));
    }

    #[test]
    fn test_focus_then_return_restores_pose() {
        let mut nav = navigator();
        let start = nav.pose();
        let target = painting(2, -3.0);

        nav.select(target, 0.0);
        nav.update(1.0);

        assert_eq!(nav.select(target, 2.0), NavAction::Return(FocusId::Exhibit(2)));
        nav.update(3.0);

        assert!(nav.pose().abs_diff_eq(&start, EPS));
        assert_eq!(nav.focused(), None);
        assert_eq!(nav.return_pose(), None);
    }

    #[test]
    fn test_return_holds_old_look_at_until_arrival() {
        let mut nav = navigator();
        let start = nav.pose();
        let target = painting(1, 0.0);

        nav.focus(target, 0.0);
        nav.update(0.6);
        assert!(nav.return_to_previous(1.0));

        for now in [1.1, 1.3, 1.5, 1.59] {
            nav.update(now);
            assert_eq!(nav.pose().look_at, target.center, "look-at moved early at {now}");
        }
        nav.update(1.7);
        assert_eq!(nav.pose().look_at, start.look_at);
    }

    #[test]
    fn test_return_without_focus_is_noop() {
        let mut nav = navigator();
        assert!(!nav.return_to_previous(0.0));
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_new_request_overrides_flight_from_current_position() {
        let mut nav = navigator();
        nav.focus(painting(0, -2.0), 0.0);
        nav.update(0.3);
        let mid = nav.pose().position;

        nav.focus(painting(1, 2.0), 0.3);
        let NavState::Transitioning(transition) = *nav.state() else {
            panic!("expected a flight in progress");
        };
        assert!(transition.from.abs_diff_eq(mid, EPS));
        assert_eq!(transition.start_time, 0.3);
        assert_eq!(nav.focused(), Some(FocusId::Exhibit(1)));
        // one level only: the way back is the mid-flight pose
        assert!(nav.return_pose().unwrap().position.abs_diff_eq(mid, EPS));
    }

    #[test]
    fn test_override_advances_to_request_time() {
        let mut nav = navigator();
        nav.focus(painting(0, 0.0), 0.0);
        // no frame ticked between the two requests
        nav.floor_move(Vec3::new(1.0, 0.0, 1.0), 0.3);
        let NavState::Transitioning(transition) = *nav.state() else {
            panic!("expected a flight in progress");
        };
        assert!(transition.from.z < 4.5);
    }

    #[test]
    fn test_floor_move_inside_bounds() {
        let mut nav = navigator();
        let point = Vec3::new(0.0, 0.0, 0.5);
        assert!(nav.floor_move(point, 0.0));
        assert_eq!(nav.pose().look_at, point);

        nav.update(1.0);
        // camera at (0, 1.6, 4.5) walks towards z = 0.5 and stops 0.5 short
        assert!(nav.pose().position.abs_diff_eq(Vec3::new(0.0, 1.6, 1.0), EPS));
        assert_eq!(nav.pose().look_at, point);
    }

    #[test]
    fn test_floor_click_outside_bounds_does_nothing() {
        let mut nav = navigator();
        let before = nav.pose();
        // wall half-width 6, margin 0.5
        assert_eq!(nav.handle_click(Some(PickHit::Floor(Vec3::new(5.8, 0.0, 0.0))), 0.0), None);
        assert!(!nav.floor_move(Vec3::new(0.0, 0.0, -5.51), 0.0));
        nav.update(0.016);
        assert_eq!(nav.pose(), before);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_floor_click_on_margin_is_accepted() {
        let mut nav = navigator();
        // exactly wall half-width minus margin
        assert!(nav.floor_move(Vec3::new(5.5, 0.0, 0.0), 0.0));
        assert!(nav.floor_move(Vec3::new(0.0, 0.0, -5.5), 0.1));
        assert_eq!(
            nav.handle_click(Some(PickHit::Floor(Vec3::new(-5.5, 0.0, 5.5))), 0.2),
            Some(NavAction::FloorMove(Vec3::new(-5.5, 0.0, 5.5)))
        );
    }

    #[test]
    fn test_floor_click_closer_than_backoff_never_retreats() {
        let mut nav = navigator();
        let start = nav.pose().position;
        // camera at z = 4.5, click 0.2 ahead with a backoff of 0.5
        assert!(nav.floor_move(Vec3::new(0.0, 0.0, 4.3), 0.0));
        nav.update(1.0);

        let end = nav.pose().position;
        assert!(end.z <= start.z + EPS, "camera backed away to z = {}", end.z);
        assert!(end.z >= 4.3 - EPS);
        assert!(end.abs_diff_eq(start, EPS));
    }

    #[test]
    fn test_focus_during_return_keeps_restored_look_at() {
        let mut nav = navigator();
        let start = nav.pose();
        let first = painting(0, -2.0);
        let second = painting(1, 2.0);

        nav.select(first, 0.0);
        nav.update(1.0);
        assert_eq!(nav.select(first, 2.0), NavAction::Return(FocusId::Exhibit(0)));

        // interrupt the return halfway
        nav.update(2.3);
        assert_eq!(nav.pose().look_at, first.center);
        nav.select(second, 2.3);
        assert_eq!(nav.return_pose().unwrap().look_at, start.look_at);

        nav.update(3.5);
        assert_eq!(nav.select(second, 4.0), NavAction::Return(FocusId::Exhibit(1)));
        nav.update(5.0);
        assert_eq!(nav.pose().look_at, start.look_at);
    }

    #[test]
    fn test_floor_move_clears_focus() {
        let mut nav = navigator();
        let target = painting(0, 0.0);
        nav.focus(target, 0.0);
        nav.update(1.0);
        nav.floor_move(Vec3::new(2.0, 0.0, 2.0), 1.0);
        nav.update(2.0);
        assert_eq!(nav.focused(), None);
        // selecting the painting again focuses rather than returns
        assert_eq!(nav.select(target, 2.0), NavAction::Focus(FocusId::Exhibit(0)));
    }

    #[test]
    fn test_click_miss_does_nothing() {
        let mut nav = navigator();
        assert_eq!(nav.handle_click(None, 0.0), None);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_orbit_ignored_during_flight() {
        let mut nav = navigator();
        nav.focus(painting(0, 0.0), 0.0);
        let before = nav.pose();
        nav.orbit(Vec2::new(50.0, 0.0));
        assert_eq!(nav.pose(), before);

        nav.update(1.0);
        let arrived = nav.pose();
        nav.orbit(Vec2::new(50.0, 0.0));
        assert_ne!(nav.pose().position, arrived.position);
    }

    #[test]
    fn test_zero_duration_arrives_on_next_update() {
        let options = NavigationOptions {
            transition_duration: 0.0,
            ..Default::default()
        };
        let mut nav = Navigator::new(CameraPose::overview(12.0, 1.6), 12.0, options);
        nav.floor_move(Vec3::ZERO, 0.0);
        assert!(nav.update(0.0));
        assert!(!nav.is_transitioning());
    }

    proptest! {
        #[test]
        fn prop_flight_stays_on_segment_and_lands(
            x in -5.0f32..5.0,
            z in -5.0f32..5.0,
            elapsed in 0.0f64..0.6,
        ) {
            let mut nav = navigator();
            prop_assert!(nav.floor_move(Vec3::new(x, 0.0, z), 0.0));
            let NavState::Transitioning(transition) = *nav.state() else {
                return Err(TestCaseError::fail("floor move did not start a flight"));
            };

            nav.update(elapsed);
            let total = transition.from.distance(transition.to);
            let pos = nav.pose().position;
            prop_assert!(pos.distance(transition.from) <= total + 1e-3);
            prop_assert!(pos.distance(transition.to) <= total + 1e-3);

            nav.update(1.0);
            prop_assert!(!nav.is_transitioning());
            prop_assert_eq!(nav.pose().position, transition.to);
        }
    }
}
