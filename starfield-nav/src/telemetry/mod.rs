//! Read-only telemetry surface a HUD polls every frame.
//!
//! The feed turns raw pick and session data into display-ready reports:
//! distances bucketed into the unit that reads best at their magnitude,
//! sizes into six ordinal categories, positions into galactic regions.
//! Reports serialise to JSON so an overlay outside the process can consume
//! them unchanged.
//!
//! The only state here is a one-frame camera cache used to answer "did the
//! camera move since the last query" for diagnostics; everything else is
//! recomputed per call so hover distances stay live while the viewer moves.

pub mod format;

use glam::Vec3;
use log::debug;
use serde::Serialize;

use crate::engine::camera::CameraPose;
use crate::engine::catalog::ObjectColor;
use crate::navigation::NavigationSnapshot;
use crate::picking::PickResult;
use format::{DistanceDisplay, GalacticRegion, SizeCategory};

/// Display-ready description of the hovered object.
#[derive(Debug, Clone, Serialize)]
pub struct HoverReport {
    pub name: String,
    /// Human-readable classification label.
    pub classification: String,
    /// Raw viewer distance in AU, recomputed this frame.
    pub distance_au: f32,
    pub distance: DistanceDisplay,
    pub size: SizeCategory,
    pub region: GalacticRegion,
    pub color: ObjectColor,
}

/// Display-ready description of the active cruise.
#[derive(Debug, Clone, Serialize)]
pub struct CruiseReport {
    pub target_name: String,
    pub current_distance: DistanceDisplay,
    pub total_distance: f32,
    /// Normalised progress in [0, 1].
    pub progress: f32,
    pub eta_seconds: f32,
}

/// Camera movement observed between consecutive queries.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CameraDelta {
    pub moved: bool,
    pub distance: f32,
}

/// Threshold below which the camera counts as stationary.
const MOVE_EPSILON: f32 = 1e-4;

/// Stateless query facade over picker results and session state, save for
/// the diagnostic camera cache.
#[derive(Debug, Default)]
pub struct TelemetryFeed {
    last_camera_position: Option<Vec3>,
    last_delta: Option<CameraDelta>,
}

impl TelemetryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the frame's camera position and report how far it moved since
    /// the previous observation.
    pub fn observe_camera(&mut self, pose: &CameraPose) -> CameraDelta {
        let delta = match self.last_camera_position {
            Some(last) => {
                let distance = last.distance(pose.position);
                CameraDelta {
                    moved: distance > MOVE_EPSILON,
                    distance,
                }
            }
            None => CameraDelta {
                moved: false,
                distance: 0.0,
            },
        };
        self.last_camera_position = Some(pose.position);
        self.last_delta = Some(delta);
        delta
    }

    /// Movement recorded by the most recent `observe_camera`.
    pub fn camera_delta(&self) -> Option<CameraDelta> {
        self.last_delta
    }

    /// Build the hover readout for a pick result.
    ///
    /// Distance comes from the pick's live viewer distance, so hovering an
    /// unchanged object while flying still updates the readout.
    pub fn hover_report(&self, pick: &PickResult<'_>) -> HoverReport {
        if let Some(delta) = self.last_delta {
            if delta.moved {
                debug!(
                    "hover {:?}: camera moved {:.2} since last query",
                    pick.object.name, delta.distance
                );
            }
        }
        HoverReport {
            name: pick.object.name.clone(),
            classification: constants::class::get_class_label(&pick.object.classification),
            distance_au: pick.viewer_distance,
            distance: DistanceDisplay::from_au(pick.viewer_distance),
            size: SizeCategory::from_radius(pick.object.base_radius),
            region: GalacticRegion::from_center_distance(pick.object.distance_from_center),
            color: pick.object.color,
        }
    }

    /// Build the cruise readout from a session snapshot.
    pub fn cruise_report(&self, snapshot: &NavigationSnapshot) -> CruiseReport {
        CruiseReport {
            target_name: snapshot.target_name.clone(),
            current_distance: DistanceDisplay::from_au(snapshot.current_distance),
            total_distance: snapshot.total_distance,
            progress: snapshot.progress,
            eta_seconds: snapshot.eta_seconds,
        }
    }
}
