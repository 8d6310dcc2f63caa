use glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};

/// Index of an object within its [`ObjectCatalog`].
///
/// Sessions and hover state hold ids rather than references; positions are
/// immutable for the lifetime of the generated field, so an id stays valid
/// as long as the catalog does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub usize);

/// Linear RGB colour produced by the field generator. Opaque to the core;
/// carried through so a HUD can render previews.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// One point-like entity in the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StellarObject {
    pub name: String,
    /// World-space position, immutable after creation.
    pub position: Vec3,
    /// Render radius in solar radii, always > 0 for catalogued objects.
    pub base_radius: f32,
    /// Generation-time classification id, resolved to a label via
    /// `constants::class::get_class_label`.
    pub classification: String,
    pub color: ObjectColor,
    /// Distance from the field centre at generation time, used for the
    /// galactic-region readout.
    pub distance_from_center: f32,
}

/// Raw generator output before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub name: String,
    pub position: [f32; 3],
    pub base_radius: f32,
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub color: ObjectColor,
    #[serde(default)]
    pub distance_from_center: f32,
}

/// Immutable-per-frame list of stellar objects.
///
/// Produced externally and read-only to the core. Malformed records are
/// dropped at construction so picking never has to re-validate.
#[derive(Debug, Default)]
pub struct ObjectCatalog {
    objects: Vec<StellarObject>,
}

impl ObjectCatalog {
    /// Build a catalog, silently skipping records with a non-finite position
    /// or non-positive radius.
    pub fn from_records(records: Vec<ObjectRecord>) -> Self {
        let mut objects = Vec::with_capacity(records.len());
        for record in records {
            let position = Vec3::from_array(record.position);
            if !position.is_finite() {
                warn!(
                    "catalog: skipping {:?}, position is not finite",
                    record.name
                );
                continue;
            }
            if !record.base_radius.is_finite() || record.base_radius <= 0.0 {
                warn!(
                    "catalog: skipping {:?}, radius {} is invalid",
                    record.name, record.base_radius
                );
                continue;
            }
            objects.push(StellarObject {
                name: record.name,
                position,
                base_radius: record.base_radius,
                classification: record.classification,
                color: record.color,
                distance_from_center: record.distance_from_center,
            });
        }
        Self { objects }
    }

    pub fn get(&self, id: ObjectId) -> Option<&StellarObject> {
        self.objects.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &StellarObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i), o))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, position: [f32; 3], radius: f32) -> ObjectRecord {
        ObjectRecord {
            name: name.to_string(),
            position,
            base_radius: radius,
            classification: "yellow_star".to_string(),
            color: ObjectColor::default(),
            distance_from_center: 0.0,
        }
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let catalog = ObjectCatalog::from_records(vec![
            record("ok", [1.0, 2.0, 3.0], 0.8),
            record("bad position", [f32::NAN, 0.0, 0.0], 1.0),
            record("bad radius", [0.0, 0.0, 0.0], 0.0),
            record("negative radius", [0.0, 0.0, 0.0], -2.0),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ObjectId(0)).unwrap().name, "ok");
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = ObjectCatalog::from_records(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.get(ObjectId(0)).is_none());
    }
}
