use anyhow::{bail, ensure, Result};
use common::color::OkLch;
use tracing::debug;

use super::{
    gamut::{avg_ch, linspace_ch},
    hue::hue_sorted,
    peaks::{find_peaks, PeakDetectionError, PeakDetectionParams, LEFT_HUE},
};

/// Lightness range in which the boundary shows the green, blue and red peaks
/// the generation relies on.
pub const LIGHTNESS_RANGE: (f64, f64) = (0.3, 0.7);

/// Colors on the boundary of sRGB at lightness `l`.
///
/// Returns `3 + n_magenta + n_cyan` colors in hue order starting from green:
/// the green, blue and red chroma peaks, magentas spaced between blue and
/// red, and cyans spaced between green and blue.
///
/// `shifts`, one per color, nudges each color toward a neighbour: `0` keeps
/// it in place, values in `(-1, 0)` move it toward the previous color and
/// values in `(0, 1)` toward the next one (cyclically).
pub fn generate(
    l: f64,
    n_magenta: usize,
    n_cyan: usize,
    shifts: Option<&[f64]>,
) -> Result<Vec<OkLch<f64>>> {
    generate_with(l, n_magenta, n_cyan, shifts, &PeakDetectionParams::default())
}

/// [`generate`] with explicit peak detection parameters.
pub fn generate_with(
    l: f64,
    n_magenta: usize,
    n_cyan: usize,
    shifts: Option<&[f64]>,
    params: &PeakDetectionParams,
) -> Result<Vec<OkLch<f64>>> {
    let (min, max) = LIGHTNESS_RANGE;
    if !(min..=max).contains(&l) {
        bail!("Lightness must be between {min} and {max}, got {l}");
    }

    let peaks = find_peaks(l, LEFT_HUE, params)?;
    let primaries = match *peaks.colors.as_slice() {
        [green, blue, red] | [green, blue, _, red] => Some((green, blue, red)),
        _ => None,
    };
    let Some((green, blue, red)) = primaries else {
        return Err(PeakDetectionError {
            lightness: l,
            peaks,
            params: *params,
        }
        .into());
    };

    let mut colors = vec![green, blue, red];
    colors.extend(interior(linspace_ch(blue, red, n_magenta + 2)));
    colors.extend(interior(linspace_ch(blue, green, n_cyan + 2)));
    let colors = hue_sorted(colors, green.h);

    debug!(
        lightness = l,
        hues = ?colors.iter().map(|c| c.h.round()).collect::<Vec<_>>(),
        "Generated boundary colors"
    );

    match shifts {
        Some(shifts) => shift(&colors, shifts),
        None => Ok(colors),
    }
}

fn interior(colors: Vec<OkLch<f64>>) -> impl Iterator<Item = OkLch<f64>> {
    let inner = colors.len().saturating_sub(2);
    colors.into_iter().skip(1).take(inner)
}

fn shift(colors: &[OkLch<f64>], shifts: &[f64]) -> Result<Vec<OkLch<f64>>> {
    let n = colors.len();
    ensure!(
        shifts.len() == n,
        "Expected {n} shifts, one per color, got {}",
        shifts.len()
    );
    ensure!(
        shifts.iter().all(|s| s.abs() < 1.0),
        "Shifts must be within (-1, 1), got {shifts:?}"
    );

    let shifted = shifts
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let neighbour = if s < 0.0 {
                colors[(i + n - 1) % n]
            } else {
                colors[(i + 1) % n]
            };
            avg_ch(neighbour, colors[i], s.abs(), 1.0 - s.abs())
        })
        .collect();

    Ok(shifted)
}
