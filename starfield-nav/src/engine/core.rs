//! Host-facing facade and per-frame orchestration.

use glam::Vec2;
use log::warn;

use crate::engine::camera::CameraPose;
use crate::engine::catalog::{ObjectCatalog, ObjectId};
use crate::engine::config::EngineConfig;
use crate::engine::input::InputState;
use crate::flight::capture::{CaptureError, CaptureStatus};
use crate::flight::{FreeFlightController, PointerMode};
use crate::navigation::{NavigationController, NavigationSnapshot};
use crate::picking::ray::PickRay;
use crate::picking::{PickKind, PickResult, Picker};
use crate::telemetry::{CruiseReport, HoverReport, TelemetryFeed};

/// The navigation core. The host loop drives it with one `tick` per frame
/// and reads poses and telemetry back; nothing here registers callbacks
/// into the host.
///
/// Pose ownership is exclusive per frame: while a cruise session is active
/// the navigation controller writes the pose and free-flight input is
/// discarded; otherwise the free-flight controller writes it and the picker
/// resolves a hover target. That mode check is the whole mutual exclusion —
/// there is no parallelism to lock against.
pub struct NavEngine {
    config: EngineConfig,
    catalog: ObjectCatalog,
    pose: CameraPose,
    flight: FreeFlightController,
    navigation: NavigationController,
    picker: Picker,
    telemetry: TelemetryFeed,
    hover: Option<HoverReport>,
}

impl NavEngine {
    pub fn new(config: EngineConfig, catalog: ObjectCatalog, initial_pose: CameraPose) -> Self {
        let flight = FreeFlightController::new(config.flight, initial_pose);
        let navigation = NavigationController::new(config.navigation);
        let picker = Picker::new(config.picker);
        Self {
            config,
            catalog,
            pose: initial_pose,
            flight,
            navigation,
            picker,
            telemetry: TelemetryFeed::new(),
            hover: None,
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self, dt: f32, input: &InputState) {
        if self.navigation.is_cruising() {
            // Sole pose writer this frame; free-flight input is sampled by
            // the host but discarded here, and the crosshair is dormant.
            self.navigation.tick(dt, &mut self.pose);
            self.hover = None;
        } else {
            self.flight.tick(dt, input, &mut self.pose);

            if self.flight.mode() == PointerMode::Locked {
                self.hover = self
                    .pick_at(input.pointer, PickKind::Hover)
                    .map(|pick| self.telemetry.hover_report(&pick));

                if input.clicked {
                    let picked = self.pick_at(input.pointer, PickKind::Click).map(|p| p.id);
                    if let Some(id) = picked {
                        self.start_cruise(id);
                    }
                }
            } else {
                // Pointer is captured for free-look; no crosshair.
                self.hover = None;
            }
        }

        self.telemetry.observe_camera(&self.pose);
    }

    fn pick_at(&self, pixel: Vec2, kind: PickKind) -> Option<PickResult<'_>> {
        let ray = PickRay::through_pixel(&self.pose, &self.config.viewport, pixel);
        self.picker
            .pick(&ray, &self.catalog, self.pose.position, kind)
    }

    fn start_cruise(&mut self, id: ObjectId) {
        match self.catalog.get(id) {
            Some(object) => self.navigation.navigate_to(id, object, &self.pose),
            None => warn!("navigate_to: unknown object {id:?}"),
        }
    }

    /// Resolve the object under a viewport pixel with the click tolerance.
    pub fn pick(&self, screen_x: f32, screen_y: f32) -> Option<PickResult<'_>> {
        self.pick_at(Vec2::new(screen_x, screen_y), PickKind::Click)
    }

    /// Start a cruise toward a catalogued object. Unknown ids are logged
    /// and ignored; an active cruise is superseded.
    pub fn navigate_to(&mut self, id: ObjectId) {
        self.start_cruise(id);
    }

    /// Toggle free-look. Returns true when the host should issue its
    /// platform pointer-capture request; the outcome comes back through
    /// [`NavEngine::resolve_capture`] on a later tick.
    pub fn toggle_free_look(&mut self) -> bool {
        self.flight.toggle_free_look()
    }

    /// Host-delivered outcome of a pending capture request.
    pub fn resolve_capture(&mut self, outcome: Result<(), CaptureError>) {
        self.flight.resolve_capture(outcome);
    }

    /// Host notification that pointer capture was revoked externally.
    pub fn capture_lost(&mut self) {
        self.flight.capture_lost();
    }

    /// Escape action: leave free-look if active.
    pub fn escape(&mut self) {
        self.flight.escape();
    }

    pub fn capture_status(&self) -> CaptureStatus {
        self.flight.capture_status()
    }

    /// Most recent capture failure, cleared on read.
    pub fn take_capture_error(&mut self) -> Option<CaptureError> {
        self.flight.take_capture_error()
    }

    /// Restore the initial pose and stop all motion. No-op mid-cruise; the
    /// session owns the pose until it ends.
    pub fn reset(&mut self) {
        if self.navigation.is_cruising() {
            return;
        }
        self.flight.reset(&mut self.pose);
    }

    /// Zero free-flight motion, keeping the pose.
    pub fn stop(&mut self) {
        self.flight.stop();
    }

    pub fn camera_pose(&self) -> CameraPose {
        self.pose
    }

    pub fn pointer_mode(&self) -> PointerMode {
        self.flight.mode()
    }

    pub fn is_cruising(&self) -> bool {
        self.navigation.is_cruising()
    }

    /// Active-session state, or `None` when idle.
    pub fn navigation_state(&self) -> Option<NavigationSnapshot> {
        self.navigation.snapshot(&self.pose)
    }

    /// Hover readout computed on the most recent tick.
    pub fn hover(&self) -> Option<&HoverReport> {
        self.hover.as_ref()
    }

    /// Display-ready cruise readout, or `None` when idle.
    pub fn cruise_report(&self) -> Option<CruiseReport> {
        self.navigation
            .snapshot(&self.pose)
            .map(|s| self.telemetry.cruise_report(&s))
    }

    pub fn catalog(&self) -> &ObjectCatalog {
        &self.catalog
    }

    /// Adopt a new viewport size after a host resize.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.config.viewport.width = width;
        self.config.viewport.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::{ObjectColor, ObjectRecord};
    use crate::engine::input::MoveKey;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn record(name: &str, position: [f32; 3], radius: f32) -> ObjectRecord {
        ObjectRecord {
            name: name.to_string(),
            position,
            base_radius: radius,
            classification: "red_dwarf".to_string(),
            color: ObjectColor::default(),
            distance_from_center: 10.0,
        }
    }

    fn engine_with(records: Vec<ObjectRecord>) -> NavEngine {
        NavEngine::new(
            EngineConfig::default(),
            ObjectCatalog::from_records(records),
            CameraPose::default(),
        )
    }

    fn centre() -> Vec2 {
        let viewport = EngineConfig::default().viewport;
        Vec2::new(viewport.width / 2.0, viewport.height / 2.0)
    }

    #[test]
    fn hovering_the_crosshair_over_a_star_reports_it() {
        // Default pose faces +Z; put the star dead ahead.
        let mut engine = engine_with(vec![record("Proxima", [0.0, 0.0, 80.0], 0.5)]);
        engine.tick(0.016, &InputState::new().with_pointer(centre()));
        let hover = engine.hover().unwrap();
        assert_eq!(hover.name, "Proxima");
        assert_relative_eq!(hover.distance_au, 80.0, epsilon = 1e-3);
    }

    #[test]
    fn clicking_a_star_starts_a_cruise_that_owns_the_pose() {
        let mut engine = engine_with(vec![record("Proxima", [0.0, 0.0, 80.0], 0.5)]);
        engine.tick(
            0.016,
            &InputState::new().with_pointer(centre()).with_click(),
        );
        assert!(engine.is_cruising());

        // Movement keys are sampled but discarded while cruising.
        let input = InputState::new().press(MoveKey::Left).with_boost();
        let before = engine.camera_pose().position;
        engine.tick(0.1, &input);
        let after = engine.camera_pose().position;
        assert_relative_eq!(after.x, before.x, epsilon = 1e-6);
        assert!(after.z > before.z, "cruise advances toward the target");

        // Run the session out; flight ownership returns afterwards.
        while engine.is_cruising() {
            engine.tick(0.1, &input);
        }
        let arrived = engine.camera_pose().position;
        // Stand-off: clamp(0.5 * 8, 80 * 0.15, 25) = 12.
        assert_relative_eq!(arrived.z, 68.0, epsilon = 1e-3);
        assert!(engine.navigation_state().is_none());
    }

    #[test]
    fn cruise_telemetry_counts_down() {
        let mut engine = engine_with(vec![record("Proxima", [0.0, 0.0, 100.0], 0.5)]);
        engine.navigate_to(ObjectId(0));
        let initial = engine.navigation_state().unwrap();
        assert_relative_eq!(initial.total_distance, 100.0);
        assert_relative_eq!(initial.eta_seconds, 2.0);

        engine.tick(0.5, &InputState::new());
        let quarter = engine.navigation_state().unwrap();
        assert_relative_eq!(quarter.progress, 0.25);
        assert_relative_eq!(quarter.eta_seconds, 1.5);
        assert!(quarter.current_distance < 100.0);

        let report = engine.cruise_report().unwrap();
        assert_eq!(report.target_name, "Proxima");
    }

    #[test]
    fn free_look_suspends_the_crosshair_and_clicks() {
        let mut engine = engine_with(vec![record("Proxima", [0.0, 0.0, 80.0], 0.5)]);
        assert!(engine.toggle_free_look());
        engine.resolve_capture(Ok(()));
        assert_eq!(engine.pointer_mode(), PointerMode::FreeLook);

        engine.tick(
            0.016,
            &InputState::new().with_pointer(centre()).with_click(),
        );
        assert!(engine.hover().is_none());
        assert!(!engine.is_cruising());
    }

    #[test]
    fn denied_capture_leaves_crosshair_mode_working() {
        let mut engine = engine_with(vec![record("Proxima", [0.0, 0.0, 80.0], 0.5)]);
        assert!(engine.toggle_free_look());
        engine.resolve_capture(Err(CaptureError::SurfaceUnavailable));
        assert_eq!(engine.pointer_mode(), PointerMode::Locked);
        assert_eq!(
            engine.take_capture_error(),
            Some(CaptureError::SurfaceUnavailable)
        );

        engine.tick(0.016, &InputState::new().with_pointer(centre()));
        assert!(engine.hover().is_some());
    }

    #[test]
    fn direct_pick_api_uses_the_click_tolerance() {
        let engine = engine_with(vec![record("Proxima", [0.0, 0.0, 80.0], 0.5)]);
        let c = centre();
        let hit = engine.pick(c.x, c.y).unwrap();
        assert_eq!(hit.object.name, "Proxima");
        assert!(engine.pick(0.0, 0.0).is_none());
    }

    #[test]
    fn navigate_to_unknown_id_is_ignored() {
        let mut engine = engine_with(vec![record("Proxima", [0.0, 0.0, 80.0], 0.5)]);
        engine.navigate_to(ObjectId(99));
        assert!(!engine.is_cruising());
    }

    #[test]
    fn reset_is_deferred_to_the_session_owner() {
        let mut engine = engine_with(vec![record("Proxima", [0.0, 0.0, 80.0], 0.5)]);
        engine.navigate_to(ObjectId(0));
        engine.tick(0.5, &InputState::new());
        let mid_cruise = engine.camera_pose();
        engine.reset();
        assert_eq!(engine.camera_pose(), mid_cruise);

        while engine.is_cruising() {
            engine.tick(0.5, &InputState::new());
        }
        engine.reset();
        assert_eq!(engine.camera_pose(), CameraPose::default());
    }
}
