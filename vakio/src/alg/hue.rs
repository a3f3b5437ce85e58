//! Arithmetic on the hue circle. All hues are in degrees.

use common::{
    color::{normalize_hue, OkLch},
    misc::linspace,
};

/// Signed difference `h1 - h2` along the shorter arc, in `[-180, 180)`.
pub fn diff_hue(h1: f64, h2: f64) -> f64 {
    (h1 - h2 + 180.0).rem_euclid(360.0) - 180.0
}

/// `n` evenly spaced hues from `h1` to `h2` along the shorter arc.
///
/// Results are in `(-180, 180]`.
pub fn linspace_hue(h1: f64, h2: f64, n: usize) -> Vec<f64> {
    let start = h1.to_radians();
    let delta = diff_hue(h2, h1).to_radians();

    linspace(0.0, delta, n)
        .into_iter()
        .map(|d| (start + d).sin().atan2((start + d).cos()).to_degrees())
        .collect()
}

/// Weighted circular mean of two hues, in `[0, 360)`.
pub fn avg_hue(h1: f64, h2: f64, weight1: f64, weight2: f64) -> f64 {
    let (a1, a2) = (h1.to_radians(), h2.to_radians());
    let y = weight1 * a1.sin() + weight2 * a2.sin();
    let x = weight1 * a1.cos() + weight2 * a2.cos();
    normalize_hue(y.atan2(x).to_degrees())
}

/// Sorts colors by hue, going counter-clockwise from `h_start`.
///
/// A color sitting exactly at `h_start` sorts first.
pub fn hue_sorted(mut colors: Vec<OkLch<f64>>, h_start: f64) -> Vec<OkLch<f64>> {
    let key = |color: &OkLch<f64>| (color.h - (h_start - 0.1)).rem_euclid(360.0);
    colors.sort_by(|a, b| key(a).total_cmp(&key(b)));
    colors
}
