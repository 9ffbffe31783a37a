//! Path-following component.
//!
//! A [`WaypointFollower`] walks an entity through an ordered list of points at
//! a fixed top speed. Each frame
//! [`waypoint_follower_system`](crate::systems::waypoint::waypoint_follower_system)
//! asks it for a [`FollowStep`]: either keep heading toward the current point,
//! or snap onto it and target the next one. When the last point is reached the
//! follower wraps to the first point on a cyclic track, or stops otherwise.
//!
//! The arrival test mirrors a frame-based "close enough" check: a point is
//! reached once the whole-pixel distance left is no more than what the
//! follower covers in this frame (`floor(distance) <= max_speed * dt`).
//! At speed zero a follower still "arrives" at a point it sits on, but never
//! moves toward one that is further than a pixel away.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Outcome of a single follower update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowStep {
    /// Not running; velocity should be zero.
    Idle,
    /// Head toward the current point with this velocity.
    Move(Vector2),
    /// Snap to this point and stop for this frame. The follower has already
    /// advanced to its next target (or stopped at the end of an open track).
    Arrive(Vector2),
}

#[derive(Component, Clone, Debug)]
pub struct WaypointFollower {
    points: Arc<[Vector2]>,
    current: usize,
    pub is_cycle: bool,
    pub running: bool,
    /// Top speed in world units per second.
    pub max_speed: f32,
}

impl WaypointFollower {
    /// Follower targeting the first point. Returns `None` for an empty path.
    pub fn new(points: Arc<[Vector2]>, is_cycle: bool, max_speed: f32) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            current: 0,
            is_cycle,
            running: false,
            max_speed,
        })
    }

    /// Where to spawn a follower of the given `width`.
    ///
    /// `gap` 0 starts on the first point. Larger gaps push the start back along
    /// the direction from the first point to the last one, by `width * 1.1`
    /// per step, which lines wagons up behind the locomotive on a closed loop.
    pub fn spawn_position(&self, width: f32, gap: u32) -> Vector2 {
        let first = self.points[0];
        if gap == 0 {
            return first;
        }
        let last = self.points[self.points.len() - 1];
        let angle = (last.y - first.y).atan2(last.x - first.x);
        let shift = width * 1.1 * gap as f32;
        Vector2 {
            x: first.x + angle.cos() * shift,
            y: first.y + angle.sin() * shift,
        }
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_target(&self) -> Vector2 {
        self.points[self.current]
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Compute this frame's motion for an entity at `position`.
    pub fn step(&mut self, position: Vector2, dt: f32) -> FollowStep {
        if !self.running {
            return FollowStep::Idle;
        }
        let target = self.current_target();
        let dx = target.x - position.x;
        let dy = target.y - position.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance.floor() > self.max_speed * dt {
            let angle = dy.atan2(dx);
            return FollowStep::Move(Vector2 {
                x: angle.cos() * self.max_speed,
                y: angle.sin() * self.max_speed,
            });
        }

        if self.current + 1 < self.points.len() {
            self.current += 1;
        } else if self.is_cycle {
            self.current = 0;
        } else {
            self.stop();
        }
        FollowStep::Arrive(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Arc<[Vector2]> {
        Arc::from(vec![
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 100.0, y: 0.0 },
            Vector2 { x: 100.0, y: 100.0 },
            Vector2 { x: 0.0, y: 100.0 },
        ])
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(WaypointFollower::new(Arc::from(Vec::new()), true, 50.0).is_none());
    }

    #[test]
    fn test_not_running_is_idle() {
        let mut f = WaypointFollower::new(square(), true, 50.0).unwrap();
        assert_eq!(f.step(Vector2 { x: 50.0, y: 50.0 }, 0.016), FollowStep::Idle);
        assert_eq!(f.current_index(), 0);
    }

    #[test]
    fn test_moves_toward_target_at_max_speed() {
        let mut f = WaypointFollower::new(square(), true, 50.0).unwrap();
        f.start();
        f.step(Vector2 { x: 0.0, y: 0.0 }, 0.1);
        match f.step(Vector2 { x: 0.0, y: 0.0 }, 0.1) {
            FollowStep::Move(v) => {
                assert!((v.x - 50.0).abs() < 1e-4);
                assert!(v.y.abs() < 1e-4);
            }
            other => panic!("expected Move, got {:?}", other),
        }
    }

    #[test]
    fn test_arrives_within_one_frame_of_travel() {
        let mut f = WaypointFollower::new(square(), true, 50.0).unwrap();
        f.start();
        // First point is under the sprite already.
        assert_eq!(
            f.step(Vector2 { x: 0.0, y: 0.0 }, 0.1),
            FollowStep::Arrive(Vector2 { x: 0.0, y: 0.0 })
        );
        assert_eq!(f.current_index(), 1);
        // 4.9 px away, 5 px per frame: arrive.
        assert_eq!(
            f.step(Vector2 { x: 95.1, y: 0.0 }, 0.1),
            FollowStep::Arrive(Vector2 { x: 100.0, y: 0.0 })
        );
        assert_eq!(f.current_index(), 2);
    }

    #[test]
    fn test_cycle_wraps_to_first_point() {
        let mut f = WaypointFollower::new(square(), true, 50.0).unwrap();
        f.start();
        for p in square().iter() {
            assert!(matches!(f.step(*p, 0.1), FollowStep::Arrive(_)));
        }
        assert_eq!(f.current_index(), 0);
        assert!(f.running);
    }

    #[test]
    fn test_open_track_stops_at_last_point() {
        let mut f = WaypointFollower::new(square(), false, 50.0).unwrap();
        f.start();
        for p in square().iter() {
            f.step(*p, 0.1);
        }
        assert!(!f.running);
        assert_eq!(f.current_index(), 3);
        assert_eq!(f.step(Vector2 { x: 0.0, y: 100.0 }, 0.1), FollowStep::Idle);
    }

    #[test]
    fn test_zero_speed_never_moves_toward_far_point() {
        let mut f = WaypointFollower::new(square(), true, 0.0).unwrap();
        f.start();
        f.step(Vector2 { x: 0.0, y: 0.0 }, 0.1);
        match f.step(Vector2 { x: 0.0, y: 0.0 }, 0.1) {
            FollowStep::Move(v) => assert_eq!((v.x, v.y), (0.0, 0.0)),
            other => panic!("expected zero Move, got {:?}", other),
        }
        assert_eq!(f.current_index(), 1);
    }

    #[test]
    fn test_spawn_position_gap_follows_closing_segment() {
        let f = WaypointFollower::new(square(), true, 50.0).unwrap();
        let p0 = f.spawn_position(20.0, 0);
        assert_eq!((p0.x, p0.y), (0.0, 0.0));
        // last point is straight below the first one
        let p2 = f.spawn_position(20.0, 2);
        assert!(p2.x.abs() < 1e-4);
        assert!((p2.y - 44.0).abs() < 1e-4);
    }
}
