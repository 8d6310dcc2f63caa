//! Animated point-to-point cruise toward a picked object.
//!
//! A cruise is a time-bounded eased interpolation from the pose at
//! `navigate_to` time to an approach point short of the target, oriented to
//! face it on arrival. At most one session exists; starting a new cruise
//! overwrites the old one from the *current* pose. The session clock
//! accumulates host-supplied delta time, so the controller has no ambient
//! time source and a stalled host cannot desynchronise it.

pub mod easing;

use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};

use crate::engine::camera::{CameraPose, Orientation};
use crate::engine::catalog::{ObjectId, StellarObject};
use easing::{cubic_ease_in_out, lerp_angle};

/// Cruise tuning. Defaults are the original explorer's values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Approach stand-off lower bound as a multiple of the target radius.
    pub approach_radius_factor: f32,
    /// Approach stand-off as a fraction of the travel distance.
    pub approach_distance_fraction: f32,
    /// Upper bound on the approach stand-off, world units.
    pub approach_max: f32,
    /// Nominal cruise speed used for the duration estimate.
    pub max_speed: f32,
    /// Duration divisor applied on top of `max_speed`.
    pub duration_divisor: f32,
    /// Shortest allowed cruise, seconds.
    pub min_duration: f32,
    /// Longest allowed cruise, seconds. Guarantees forward progress even if
    /// the duration estimate degenerates.
    pub max_duration: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            approach_radius_factor: 8.0,
            approach_distance_fraction: 0.15,
            approach_max: 25.0,
            max_speed: 25.0,
            duration_divisor: 2.0,
            min_duration: 1.0,
            max_duration: 5.0,
        }
    }
}

/// One active cruise. Owned exclusively by the controller.
#[derive(Debug, Clone)]
struct NavigationSession {
    target: ObjectId,
    target_name: String,
    target_position: Vec3,
    start_pose: CameraPose,
    target_pose: CameraPose,
    elapsed: f32,
    duration: f32,
    progress: f32,
    total_distance: f32,
}

/// Read-only view of the active session for the telemetry surface.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationSnapshot {
    pub target: ObjectId,
    pub target_name: String,
    /// Live distance from the camera to the target object.
    pub current_distance: f32,
    pub total_distance: f32,
    pub progress: f32,
    pub eta_seconds: f32,
}

/// Owns the camera pose while a cruise session is active.
#[derive(Debug, Default)]
pub struct NavigationController {
    config: NavigationConfig,
    session: Option<NavigationSession>,
}

impl NavigationController {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn is_cruising(&self) -> bool {
        self.session.is_some()
    }

    /// Start a cruise toward `object` from the current pose.
    ///
    /// Valid in any state; an active session is discarded, not merged. A
    /// zero-distance target is already arrived and leaves the controller
    /// idle.
    pub fn navigate_to(&mut self, id: ObjectId, object: &StellarObject, pose: &CameraPose) {
        if let Some(old) = self.session.take() {
            info!(
                "cruise to {:?} superseded by {:?}",
                old.target_name, object.name
            );
        }

        let to_target = object.position - pose.position;
        let total_distance = to_target.length();
        if total_distance <= f32::EPSILON {
            info!("already at {:?}, cruise skipped", object.name);
            return;
        }
        let direction = to_target / total_distance;

        let approach = (total_distance * self.config.approach_distance_fraction)
            .min(self.config.approach_max)
            .max(object.base_radius * self.config.approach_radius_factor);
        let target_position = object.position - direction * approach;
        let target_orientation = Orientation::looking_at(target_position, object.position)
            .unwrap_or(pose.orientation);

        let duration = (total_distance / (self.config.max_speed * self.config.duration_divisor))
            .clamp(self.config.min_duration, self.config.max_duration);

        info!(
            "cruise to {:?}: distance {:.1}, duration {:.1}s",
            object.name, total_distance, duration
        );

        self.session = Some(NavigationSession {
            target: id,
            target_name: object.name.clone(),
            target_position: object.position,
            start_pose: *pose,
            target_pose: CameraPose::new(target_position, target_orientation),
            elapsed: 0.0,
            duration,
            progress: 0.0,
            total_distance,
        });
    }

    /// Advance one frame. The caller guarantees a session is active; this is
    /// the frame's sole pose writer.
    pub fn tick(&mut self, dt: f32, pose: &mut CameraPose) {
        let Some(session) = &mut self.session else {
            return;
        };

        session.elapsed += dt;
        session.progress = (session.elapsed / session.duration).clamp(0.0, 1.0);
        let eased = cubic_ease_in_out(session.progress);

        let start = &session.start_pose;
        let target = &session.target_pose;
        pose.position = start.position.lerp(target.position, eased);
        pose.orientation = Orientation::new(
            lerp_angle(start.orientation.yaw, target.orientation.yaw, eased),
            lerp_angle(start.orientation.pitch, target.orientation.pitch, eased),
            lerp_angle(start.orientation.roll, target.orientation.roll, eased),
        );

        if session.progress >= 1.0 {
            // Snap to the exact target so no floating-point residue drifts
            // the arrival pose.
            *pose = session.target_pose;
            info!("cruise complete: arrived at {:?}", session.target_name);
            self.session = None;
        }
    }

    /// Session state for the telemetry surface, with the target distance
    /// recomputed from the live camera position.
    pub fn snapshot(&self, pose: &CameraPose) -> Option<NavigationSnapshot> {
        self.session.as_ref().map(|s| NavigationSnapshot {
            target: s.target,
            target_name: s.target_name.clone(),
            current_distance: pose.position.distance(s.target_position),
            total_distance: s.total_distance,
            progress: s.progress,
            eta_seconds: s.duration * (1.0 - s.progress),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::ObjectColor;
    use approx::assert_relative_eq;

    fn star(name: &str, position: Vec3, radius: f32) -> StellarObject {
        StellarObject {
            name: name.to_string(),
            position,
            base_radius: radius,
            classification: "yellow_star".to_string(),
            color: ObjectColor::default(),
            distance_from_center: 0.0,
        }
    }

    #[test]
    fn duration_and_midpoint_follow_the_ease_curve() {
        // distance 100, max_speed 25, divisor 2 -> duration 2 s.
        let mut nav = NavigationController::default();
        let mut pose = CameraPose::default();
        let target = star("Vega", Vec3::new(0.0, 0.0, 100.0), 1.0);
        nav.navigate_to(ObjectId(0), &target, &pose);

        let snapshot = nav.snapshot(&pose).unwrap();
        assert_relative_eq!(snapshot.eta_seconds, 2.0);

        // Quarter way through time: progress 0.25, eased 0.0625.
        nav.tick(0.5, &mut pose);
        let snapshot = nav.snapshot(&pose).unwrap();
        assert_relative_eq!(snapshot.progress, 0.25);
        // approach = clamp shape: max(1*8, min(25, 100*0.15)) = 15, so the
        // approach point sits 85 units out.
        assert_relative_eq!(pose.position.z, 85.0 * 0.0625, epsilon = 1e-4);

        // Halfway through time the eased curve crosses the linear midpoint.
        nav.tick(0.5, &mut pose);
        assert_relative_eq!(pose.position.z, 42.5, epsilon = 1e-4);
    }

    #[test]
    fn arrival_snaps_exactly_and_goes_idle() {
        let mut nav = NavigationController::default();
        let mut pose = CameraPose::default();
        let target = star("Vega", Vec3::new(30.0, 10.0, 100.0), 1.0);
        nav.navigate_to(ObjectId(0), &target, &pose);

        let total = target.position.length();
        let expected_approach = (total * 0.15).min(25.0).max(8.0);

        // Run past the duration in uneven steps; one extra frame at most.
        let mut ticks = 0;
        while nav.is_cruising() {
            nav.tick(0.3, &mut pose);
            ticks += 1;
            assert!(ticks < 25, "cruise failed to finish");
        }

        // Exact arrival pose, no residue: the stand-off distance is hit and
        // the camera looks dead at the star.
        let to_target = target.position - pose.position;
        assert_relative_eq!(to_target.length(), expected_approach, epsilon = 1e-3);
        assert_relative_eq!(
            pose.orientation.forward().dot(to_target.normalize()),
            1.0,
            epsilon = 1e-5
        );
        assert!(nav.snapshot(&pose).is_none());
    }

    #[test]
    fn progress_is_monotonic_and_reaches_one() {
        let mut nav = NavigationController::default();
        let mut pose = CameraPose::default();
        nav.navigate_to(ObjectId(0), &star("Rigel", Vec3::Z * 200.0, 1.0), &pose);
        let mut last = 0.0;
        let mut final_progress = 0.0;
        while nav.is_cruising() {
            nav.tick(0.07, &mut pose);
            if let Some(s) = nav.snapshot(&pose) {
                assert!(s.progress >= last);
                last = s.progress;
                final_progress = s.progress;
            } else {
                final_progress = 1.0;
            }
        }
        assert_relative_eq!(final_progress, 1.0);
    }

    #[test]
    fn zero_distance_target_is_immediate_arrival() {
        let mut nav = NavigationController::default();
        let pose = CameraPose::default();
        let target = star("Here", Vec3::ZERO, 1.0);
        nav.navigate_to(ObjectId(0), &target, &pose);
        assert!(!nav.is_cruising());
    }

    #[test]
    fn renavigating_supersedes_from_the_current_pose() {
        let mut nav = NavigationController::default();
        let mut pose = CameraPose::default();
        let first = star("A", Vec3::new(0.0, 0.0, 200.0), 1.0);
        let second = star("B", Vec3::new(200.0, 0.0, 0.0), 1.0);

        nav.navigate_to(ObjectId(0), &first, &pose);
        nav.tick(1.0, &mut pose);
        let switch_point = pose.position;

        nav.navigate_to(ObjectId(1), &second, &pose);
        let snapshot = nav.snapshot(&pose).unwrap();
        assert_eq!(snapshot.target, ObjectId(1));
        assert_relative_eq!(snapshot.progress, 0.0);

        while nav.is_cruising() {
            nav.tick(0.1, &mut pose);
        }
        // Ends near B, well away from A's approach corridor.
        assert!(pose.position.distance(second.position) <= 26.0);
        assert!(pose.position.distance(first.position) > 100.0);
        // And the new session really started from the switch point.
        assert!(switch_point.z > 0.0);
    }

    #[test]
    fn duration_is_bounded_for_extreme_distances() {
        let mut nav = NavigationController::default();
        let pose = CameraPose::default();
        nav.navigate_to(ObjectId(0), &star("Far", Vec3::Z * 1.0e6, 1.0), &pose);
        assert_relative_eq!(nav.snapshot(&pose).unwrap().eta_seconds, 5.0);

        let mut nav = NavigationController::default();
        nav.navigate_to(ObjectId(0), &star("Near", Vec3::Z * 3.0, 0.1), &pose);
        assert_relative_eq!(nav.snapshot(&pose).unwrap().eta_seconds, 1.0);
    }
}
