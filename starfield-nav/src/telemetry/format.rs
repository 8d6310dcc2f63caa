use serde::Serialize;
use std::fmt;

use constants::units::{
    CORE_RADIUS_AU, DISK_RADIUS_AU, FAR_DISTANCE_AU, LIGHT_YEARS_PER_AU, MID_DISTANCE_AU,
    MILLION_KM_PER_AU, NEAR_DISTANCE_AU, SIZE_CATEGORY_BOUNDS,
};

/// A distance bucketed into the unit the HUD shows at that magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DistanceDisplay {
    /// Sub-AU distances read better in millions of kilometres.
    MillionKm(f32),
    /// Mid-range distances keep one decimal of precision.
    TenthAu(f32),
    /// Longer distances round to whole AU.
    WholeAu(f32),
    /// Interstellar distances switch to light years.
    LightYears(f32),
}

impl DistanceDisplay {
    pub fn from_au(distance: f32) -> Self {
        if distance < NEAR_DISTANCE_AU {
            Self::MillionKm((distance * MILLION_KM_PER_AU).round())
        } else if distance < MID_DISTANCE_AU {
            Self::TenthAu((distance * 10.0).round() / 10.0)
        } else if distance < FAR_DISTANCE_AU {
            Self::WholeAu(distance.round())
        } else {
            let light_years = distance * LIGHT_YEARS_PER_AU;
            Self::LightYears((light_years * 100.0).round() / 100.0)
        }
    }
}

impl fmt::Display for DistanceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MillionKm(v) => write!(f, "{v:.0} million km"),
            Self::TenthAu(v) => write!(f, "{v:.1} AU"),
            Self::WholeAu(v) => write!(f, "{v:.0} AU"),
            Self::LightYears(v) => write!(f, "{v:.2} light years"),
        }
    }
}

/// Six ordinal size categories, thresholds in solar radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SizeCategory {
    ExtremelySmall,
    VerySmall,
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl SizeCategory {
    pub fn from_radius(radius: f32) -> Self {
        const ORDER: [SizeCategory; 5] = [
            SizeCategory::ExtremelySmall,
            SizeCategory::VerySmall,
            SizeCategory::Small,
            SizeCategory::Medium,
            SizeCategory::Large,
        ];
        for (bound, category) in SIZE_CATEGORY_BOUNDS.iter().zip(ORDER) {
            if radius < *bound {
                return category;
            }
        }
        Self::VeryLarge
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ExtremelySmall => "Extremely Small",
            Self::VerySmall => "Very Small",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::VeryLarge => "Very Large",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where an object sits in the field, by distance from the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GalacticRegion {
    Core,
    Disk,
    Halo,
}

impl GalacticRegion {
    pub fn from_center_distance(distance: f32) -> Self {
        if distance < CORE_RADIUS_AU {
            Self::Core
        } else if distance < DISK_RADIUS_AU {
            Self::Disk
        } else {
            Self::Halo
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Core => "Galactic Core",
            Self::Disk => "Galactic Disk",
            Self::Halo => "Galactic Halo",
        }
    }
}

impl fmt::Display for GalacticRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
