/// Light years per astronomical unit.
pub const LIGHT_YEARS_PER_AU: f32 = 0.000_015_8;

/// Million kilometres per astronomical unit, rounded the way the HUD displays it.
pub const MILLION_KM_PER_AU: f32 = 1000.0;

/// Below this distance (AU) the HUD switches to the million-kilometre scale.
pub const NEAR_DISTANCE_AU: f32 = 1.0;

/// Below this distance (AU) distances display with one decimal of precision.
pub const MID_DISTANCE_AU: f32 = 100.0;

/// Above this distance (AU) the HUD switches to light years.
pub const FAR_DISTANCE_AU: f32 = 1000.0;

/// Size-category upper bounds in solar radii, smallest to largest.
/// Anything at or past the last bound is the sixth category.
pub const SIZE_CATEGORY_BOUNDS: [f32; 5] = [0.1, 0.3, 0.6, 0.8, 1.2];

/// Galactic-core outer radius (AU from field centre).
pub const CORE_RADIUS_AU: f32 = 40.0;

/// Galactic-disk outer radius (AU from field centre).
pub const DISK_RADIUS_AU: f32 = 200.0;
