use std::f32::consts::{PI, TAU};

/// Cubic ease-in-out over normalised progress.
pub fn cubic_ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Wrap an angle into (-PI, PI].
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Interpolate between two angles along the shorter rotational path.
pub fn lerp_angle(start: f32, end: f32, t: f32) -> f32 {
    start + wrap_angle(end - start) * t
}
