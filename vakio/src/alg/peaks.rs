use std::fmt::{self, Display};

use anyhow::Result;
use common::{
    color::{normalize_hue, OkLch},
    misc::linspace,
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use super::{
    gamut::{max_chroma_with, DEFAULT_TOLERANCE},
    smoothing::savgol_filter,
};

/// Hue the peak search starts from. Starting between yellow and green puts
/// the green peak first and keeps every peak away from the ends.
pub const LEFT_HUE: f64 = 100.0;

/// Tuning of the chroma peak search. The defaults hold for every lightness
/// accepted by [`generate`](super::generate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakDetectionParams {
    /// Minimum topographic prominence of a peak, per mille.
    pub prominence: f64,
    /// Number of hue samples over the full circle.
    pub resolution: usize,
    pub window_length: usize,
    pub polyorder: usize,
    /// Bisection tolerance of each chroma sample, per mille.
    pub tolerance: f64,
}

/// Local chroma maxima along the gamut boundary at a fixed lightness.
#[derive(Debug, Clone)]
pub struct Peaks {
    /// Raw (unsmoothed) boundary colors at the peak hues, in hue order from
    /// the starting hue.
    pub colors: Vec<OkLch<f64>>,
    pub prominences: Vec<f64>,
}

/// The boundary at some lightness did not show the expected three or four
/// chroma peaks.
#[derive(Debug, Clone)]
pub struct PeakDetectionError {
    pub lightness: f64,
    pub peaks: Peaks,
    pub params: PeakDetectionParams,
}

/// Finds the chroma peaks of the sRGB boundary at lightness `l`.
///
/// Hues are sampled over `[left_h, left_h + 360]`; `left_h` therefore decides
/// the order of the returned peaks.
pub fn find_peaks(l: f64, left_h: f64, params: &PeakDetectionParams) -> Result<Peaks> {
    let hues = linspace(left_h, left_h + 360.0, params.resolution);
    let chroma = hues
        .par_iter()
        .map(|&h| max_chroma_with(l, h, 0.0, params.tolerance))
        .collect::<Vec<_>>();

    let smoothed = savgol_filter(&chroma, params.window_length, params.polyorder)?;

    let (indices, prominences): (Vec<_>, Vec<_>) = local_maxima(&smoothed)
        .into_iter()
        .map(|peak| (peak, prominence(&smoothed, peak)))
        .filter(|&(_, prominence)| prominence >= params.prominence)
        .unzip();

    let colors = indices
        .iter()
        .map(|&i| OkLch::new(l, chroma[i], normalize_hue(hues[i])))
        .collect::<Vec<_>>();

    debug!(
        lightness = l,
        hues = ?colors.iter().map(|c| c.h).collect::<Vec<_>>(),
        "Found {} chroma peaks",
        colors.len()
    );

    Ok(Peaks {
        colors,
        prominences,
    })
}

/// Indices of samples strictly greater than both neighbours. Flat peaks
/// resolve to their middle sample (rounded down) and the first and last
/// samples never qualify.
fn local_maxima(x: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if x.len() < 3 {
        return peaks;
    }

    let last = x.len() - 1;
    let mut i = 1;
    while i < last {
        if x[i - 1] < x[i] {
            let mut ahead = i + 1;
            while ahead < last && x[ahead] == x[i] {
                ahead += 1;
            }

            if x[ahead] < x[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }

    peaks
}

/// Height of a peak above the higher of the two lowest points reached before
/// climbing above the peak on either side.
fn prominence(x: &[f64], peak: usize) -> f64 {
    let height = x[peak];

    let left_min = x[..=peak]
        .iter()
        .rev()
        .take_while(|&&v| v <= height)
        .fold(height, |acc, &v| acc.min(v));
    let right_min = x[peak..]
        .iter()
        .take_while(|&&v| v <= height)
        .fold(height, |acc, &v| acc.min(v));

    height - left_min.max(right_min)
}

impl Default for PeakDetectionParams {
    fn default() -> Self {
        Self {
            prominence: 0.2,
            resolution: 360,
            window_length: 10,
            polyorder: 3,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Display for PeakDetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = self.peaks.colors.len();
        let suggested = if found > 4 {
            self.params.prominence + 0.05
        } else {
            (self.params.prominence - 0.05).max(0.0)
        };

        writeln!(f, "Peak detection assumptions were violated.")?;
        writeln!(f)?;
        writeln!(f, "Expected 3 or 4 peaks, found {found} peaks.")?;
        writeln!(f)?;
        writeln!(f, "Lightness level: {}", self.lightness)?;
        writeln!(f, "{:?}", self.params)?;
        writeln!(f)?;
        writeln!(
            f,
            "The peak detection parameters need adjusting for this lightness. \
             It might help to set the prominence to {suggested:.2}."
        )?;
        writeln!(f)?;
        write!(f, "Prominences of detected peaks: {:?}", self.peaks.prominences)
    }
}

impl std::error::Error for PeakDetectionError {}
