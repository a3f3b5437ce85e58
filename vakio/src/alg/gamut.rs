//! Search along the boundary of the sRGB gamut in Oklch coordinates.

use common::{
    color::{normalize_hue, OkLch},
    misc::linspace,
};

use super::hue::{avg_hue, linspace_hue};

/// Upper end of the chroma search, per mille. Every sRGB color has a
/// smaller Oklch chroma.
const CHROMA_LIMIT: f64 = 360.0;

/// Default interval width, per mille, at which [`max_chroma`] stops.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Finds a sign change of `f` between `a` and `b` by bisection.
///
/// The half sharing the sign of `f(a)` is discarded each step. Returns the
/// left end of the final interval, which is no wider than `tol`.
pub fn bisect(a: f64, b: f64, f: impl Fn(f64) -> f64, tol: f64) -> f64 {
    let (mut a, mut b) = if a > b { (b, a) } else { (a, b) };
    while (b - a).abs() > tol {
        let c = (a + b) / 2.0;
        if sign(f(c)) == sign(f(a)) {
            a = c;
        } else {
            b = c;
        }
    }
    a
}

/// Largest chroma, per mille, that keeps `(l, c, h)` inside sRGB.
pub fn max_chroma(l: f64, h: f64) -> f64 {
    max_chroma_with(l, h, 0.0, DEFAULT_TOLERANCE)
}

/// [`max_chroma`] with an explicit `margin` subtracted from the result and a
/// bisection tolerance.
///
/// Lightness must be strictly inside `(0, 1)`, where the achromatic color is
/// itself in gamut.
pub fn max_chroma_with(l: f64, h: f64, margin: f64, tol: f64) -> f64 {
    let inside = |c: f64| {
        let in_gamut = OkLch::new(l, c, h).in_gamut();
        if in_gamut {
            0.5
        } else {
            -0.5
        }
    };
    bisect(0.0, CHROMA_LIMIT, inside, tol) - margin
}

/// Clips the chroma of `color` to the gamut boundary and wraps its hue.
pub fn clamp(color: OkLch<f64>) -> OkLch<f64> {
    let OkLch { l, c, h } = color;
    OkLch::new(l, c.min(max_chroma(l, h)), normalize_hue(h))
}

/// `n` colors evenly spaced in the chroma-hue plane from `color1` to
/// `color2`, all at the lightness of `color1` and clipped to the gamut.
pub fn linspace_ch(color1: OkLch<f64>, color2: OkLch<f64>, n: usize) -> Vec<OkLch<f64>> {
    let l = color1.l;
    linspace(color1.c, color2.c, n)
        .into_iter()
        .zip(linspace_hue(color1.h, color2.h, n))
        .map(|(c, h)| OkLch::new(l, c.min(max_chroma(l, h)), normalize_hue(h)))
        .collect()
}

/// Weighted average in the chroma-hue plane at the lightness of `color1`,
/// clipped to the gamut.
pub fn avg_ch(color1: OkLch<f64>, color2: OkLch<f64>, weight1: f64, weight2: f64) -> OkLch<f64> {
    clamp(OkLch::new(
        color1.l,
        weight1 * color1.c + weight2 * color2.c,
        avg_hue(color1.h, color2.h, weight1, weight2),
    ))
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}
