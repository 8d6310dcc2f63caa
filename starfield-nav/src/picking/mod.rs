//! Spatial picking against the object catalog.
//!
//! Hit-testing instanced point geometry through the renderer proved
//! unreliable, so picking is done analytically: cast a ray under the
//! pointer, measure each object's perpendicular distance to the ray, and
//! accept objects within a distance-scaled effective radius. The winner is
//! the candidate nearest along the view direction, not the one nearest the
//! ray, so a small foreground object beats a large background one.

pub mod ray;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::engine::catalog::{ObjectCatalog, ObjectId, StellarObject};
use ray::PickRay;

/// Whether a query uses the hover or the click tolerance.
///
/// Click tolerance is deliberately looser: a click is an intent, a hover is
/// a readout, and distant objects subtend fractions of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickKind {
    Hover,
    Click,
}

/// Tuning for the effective pick radius.
///
/// `effective = clamp(viewer_distance * scale, 2 * base_radius, cap)`, with
/// the lower bound winning when the two collide. Only the shape of the
/// formula is contractual; the shipped values are the original explorer's
/// tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Distance-to-radius scale for hover queries.
    pub hover_radius_scale: f32,
    /// Upper bound on the hover tolerance, world units.
    pub hover_radius_cap: f32,
    /// Distance-to-radius scale for click queries.
    pub click_radius_scale: f32,
    /// Upper bound on the click tolerance, world units.
    pub click_radius_cap: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            hover_radius_scale: 0.02,
            hover_radius_cap: 10.0,
            click_radius_scale: 0.05,
            click_radius_cap: 25.0,
        }
    }
}

impl PickerConfig {
    fn tolerance(&self, kind: PickKind) -> (f32, f32) {
        match kind {
            PickKind::Hover => (self.hover_radius_scale, self.hover_radius_cap),
            PickKind::Click => (self.click_radius_scale, self.click_radius_cap),
        }
    }
}

/// A resolved pick. Ephemeral: rebuilt on every query, never cached, so the
/// reported viewer distance stays live while the camera moves.
#[derive(Debug, Clone, Copy)]
pub struct PickResult<'a> {
    pub id: ObjectId,
    pub object: &'a StellarObject,
    /// Distance from the viewer to the object centre, recomputed this query.
    pub viewer_distance: f32,
    /// Distance along the ray to the closest approach point.
    pub projection: f32,
}

/// Ray-versus-catalog picker.
#[derive(Debug, Clone, Default)]
pub struct Picker {
    config: PickerConfig,
}

impl Picker {
    pub fn new(config: PickerConfig) -> Self {
        Self { config }
    }

    /// Effective pick radius for an object seen from `viewer_distance` away.
    pub fn effective_radius(&self, viewer_distance: f32, base_radius: f32, kind: PickKind) -> f32 {
        let (scale, cap) = self.config.tolerance(kind);
        (viewer_distance * scale).min(cap).max(base_radius * 2.0)
    }

    /// Test the ray against every catalogued object and return at most one
    /// hit: the candidate with the smallest along-ray projection.
    ///
    /// Objects behind the ray origin (negative projection) never hit, even
    /// when geometrically aligned with the ray line.
    pub fn pick<'a>(
        &self,
        ray: &PickRay,
        catalog: &'a ObjectCatalog,
        viewer_position: Vec3,
        kind: PickKind,
    ) -> Option<PickResult<'a>> {
        let mut best: Option<PickResult<'a>> = None;

        for (id, object) in catalog.iter() {
            let to_object = object.position - ray.origin;
            let projection = to_object.dot(ray.direction);
            if projection < 0.0 {
                continue;
            }

            let closest_on_ray = ray.point_at(projection);
            let perpendicular = closest_on_ray.distance(object.position);

            let viewer_distance = object.position.distance(viewer_position);
            let effective = self.effective_radius(viewer_distance, object.base_radius, kind);
            if perpendicular > effective {
                continue;
            }

            // Ties on projection keep the first candidate encountered.
            if best.as_ref().is_none_or(|b| projection < b.projection) {
                best = Some(PickResult {
                    id,
                    object,
                    viewer_distance,
                    projection,
                });
            }
        }

        best
    }
}
