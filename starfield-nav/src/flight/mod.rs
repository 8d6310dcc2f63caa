//! Free-flight camera controller.
//!
//! Two mutually exclusive pointer modes: in crosshair mode the pointer
//! targets objects for picking and the orientation stays put; in free-look
//! mode the pointer is captured and its deltas drive the view. Movement
//! keys work in both, with a low-pass-filtered velocity so starts and stops
//! coast instead of snapping.

pub mod capture;

use glam::{Vec2, Vec3};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::engine::camera::CameraPose;
use crate::engine::input::{InputState, MoveKey};
use capture::{CaptureError, CaptureStatus, PointerCapture};

/// Pointer mode as seen by the rest of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    /// Pointer free, acting as the pick crosshair.
    Locked,
    /// Pointer captured, deltas rotate the camera.
    FreeLook,
}

/// Free-flight tuning. Defaults are the original explorer's values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Cruise speed in world units per second.
    pub base_speed: f32,
    /// Speed factor while the boost key is held.
    pub boost_multiplier: f32,
    /// Exponential low-pass factor for velocity, in [0, 1).
    pub smoothing: f32,
    /// Angular velocity to orientation scale, radians per second.
    pub rotation_speed: f32,
    /// Pointer-delta to angular-velocity scale.
    pub look_sensitivity: f32,
    /// Per-frame decay applied to angular velocity.
    pub look_decay: f32,
    /// Pitch keeps this margin (radians) away from straight up/down.
    pub pitch_margin: f32,
    /// Maximum distance from the field origin.
    pub boundary_radius: f32,
    /// Velocity factor applied after a boundary clamp, < 1 so the camera
    /// does not oscillate at the edge.
    pub boundary_damping: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            base_speed: 50.0,
            boost_multiplier: 3.0,
            smoothing: 0.9,
            rotation_speed: 2.0,
            look_sensitivity: 0.002,
            look_decay: 0.8,
            pitch_margin: 0.1,
            boundary_radius: 1000.0,
            boundary_damping: 0.5,
        }
    }
}

/// Angular velocities below this are treated as settled.
const LOOK_EPSILON: f32 = 0.001;

/// Owns the camera pose while no cruise session is active.
#[derive(Debug)]
pub struct FreeFlightController {
    config: FlightConfig,
    capture: PointerCapture,
    velocity: Vec3,
    /// x drives yaw, y drives pitch.
    look_velocity: Vec2,
    home: CameraPose,
}

impl FreeFlightController {
    /// `home` is the pose `reset` restores.
    pub fn new(config: FlightConfig, home: CameraPose) -> Self {
        Self {
            config,
            capture: PointerCapture::default(),
            velocity: Vec3::ZERO,
            look_velocity: Vec2::ZERO,
            home,
        }
    }

    pub fn mode(&self) -> PointerMode {
        if self.capture.is_captured() {
            PointerMode::FreeLook
        } else {
            PointerMode::Locked
        }
    }

    /// Toggle between crosshair and free-look.
    ///
    /// Entering free-look is asynchronous: this only starts the capture
    /// handshake, and the mode flips when the host resolves it. Returns
    /// true when the host should issue a platform capture request now.
    pub fn toggle_free_look(&mut self) -> bool {
        match self.mode() {
            PointerMode::FreeLook => {
                self.capture.release();
                info!("free-look off, pointer acts as crosshair");
                false
            }
            PointerMode::Locked => self.capture.request(),
        }
    }

    /// Host-delivered outcome of a pending capture request.
    pub fn resolve_capture(&mut self, outcome: Result<(), CaptureError>) {
        self.capture.resolve(outcome);
        if self.capture.is_captured() {
            info!("free-look on");
        }
    }

    /// Host notification that capture was lost externally.
    pub fn capture_lost(&mut self) {
        self.capture.revoked();
    }

    pub fn capture_status(&self) -> CaptureStatus {
        self.capture.status()
    }

    pub fn take_capture_error(&mut self) -> Option<CaptureError> {
        self.capture.take_error()
    }

    /// An escape action: leave free-look if active.
    pub fn escape(&mut self) {
        if self.mode() == PointerMode::FreeLook {
            self.capture.release();
            info!("free-look off (escape)");
        }
    }

    /// Advance one frame. The caller guarantees no cruise session is active;
    /// this is the frame's sole pose writer.
    pub fn tick(&mut self, dt: f32, input: &InputState, pose: &mut CameraPose) {
        self.apply_movement(dt, input, pose);
        self.apply_look(dt, input, pose);
    }

    fn apply_movement(&mut self, dt: f32, input: &InputState, pose: &mut CameraPose) {
        let orientation = pose.orientation;
        let forward = orientation.forward();
        let right = orientation.right();
        let up = Vec3::Y;

        let mut desired = Vec3::ZERO;
        if input.is_pressed(MoveKey::Forward) {
            desired += forward;
        }
        if input.is_pressed(MoveKey::Backward) {
            desired -= forward;
        }
        if input.is_pressed(MoveKey::Right) {
            desired += right;
        }
        if input.is_pressed(MoveKey::Left) {
            desired -= right;
        }
        if input.is_pressed(MoveKey::Ascend) {
            desired += up;
        }
        if input.is_pressed(MoveKey::Descend) {
            desired -= up;
        }

        let smoothing = self.config.smoothing;
        if desired != Vec3::ZERO {
            let speed = if input.boost {
                self.config.base_speed * self.config.boost_multiplier
            } else {
                self.config.base_speed
            };
            let desired = desired.normalize() * speed * dt;
            self.velocity = self.velocity * smoothing + desired * (1.0 - smoothing);
        } else {
            // No input: coast down under the same filter.
            self.velocity *= smoothing;
        }

        let next = pose.position + self.velocity;
        if next.length() <= self.config.boundary_radius {
            pose.position = next;
        } else {
            pose.position = next.normalize() * self.config.boundary_radius;
            self.velocity *= self.config.boundary_damping;
            debug!(
                "flight: clamped to boundary sphere r={}",
                self.config.boundary_radius
            );
        }
    }

    fn apply_look(&mut self, dt: f32, input: &InputState, pose: &mut CameraPose) {
        // Deltas only steer while captured; residual angular velocity keeps
        // decaying after leaving free-look.
        if self.mode() == PointerMode::FreeLook && input.look_delta != Vec2::ZERO {
            self.look_velocity += input.look_delta * self.config.look_sensitivity;
        }

        if self.look_velocity.length() <= LOOK_EPSILON {
            return;
        }

        let orientation = &mut pose.orientation;
        orientation.yaw += self.look_velocity.x * self.config.rotation_speed * dt;
        orientation.pitch += self.look_velocity.y * self.config.rotation_speed * dt;

        let limit = FRAC_PI_2 - self.config.pitch_margin;
        orientation.pitch = orientation.pitch.clamp(-limit, limit);

        self.look_velocity *= self.config.look_decay;
    }

    /// Restore the home pose and zero all motion.
    pub fn reset(&mut self, pose: &mut CameraPose) {
        *pose = self.home;
        self.velocity = Vec3::ZERO;
        self.look_velocity = Vec2::ZERO;
        info!("flight: pose reset");
    }

    /// Zero all motion, keeping the current pose.
    pub fn stop(&mut self) {
        self.velocity = Vec3::ZERO;
        self.look_velocity = Vec2::ZERO;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }
}
