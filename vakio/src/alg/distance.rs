use common::color::OkLch;
use itertools::Itertools;

use super::hue::diff_hue;

/// Default weight of the lightness difference in [`dist_perceptual`].
pub const LIGHTNESS_WEIGHT: f64 = 0.4;

/// Perceptual distance between two colors.
///
/// Uses the norm `|color|² = wL·L² + |(a, b)|²` on Oklab coordinates with the
/// euclidean norm on `(a, b)`, usually with `weight` = [`LIGHTNESS_WEIGHT`].
pub fn dist_perceptual(color1: OkLch<f64>, color2: OkLch<f64>, weight: f64) -> f64 {
    let (c1, c2) = (color1.c / 1000.0, color2.c / 1000.0);
    let dh = (color1.h - color2.h).to_radians();

    let dab2 = (c1 * c1 + c2 * c2 - 2.0 * c1 * c2 * dh.cos()).max(0.0);
    let dl = color1.l - color2.l;
    (weight * dl * dl + dab2).sqrt()
}

/// Euclidean distance in the chroma-hue plane, respecting the periodicity
/// of hue. With chroma per mille and hue in degrees both axes have a
/// comparable scale.
pub fn dist_in_ch(color1: OkLch<f64>, color2: OkLch<f64>) -> f64 {
    diff_hue(color1.h, color2.h).hypot(color1.c - color2.c)
}

/// Smallest pairwise [`dist_in_ch`], or infinity for fewer than two colors.
pub fn min_dist_in_ch(colors: &[OkLch<f64>]) -> f64 {
    colors
        .iter()
        .tuple_combinations()
        .map(|(a, b)| dist_in_ch(*a, *b))
        .fold(f64::INFINITY, f64::min)
}
