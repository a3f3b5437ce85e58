mod distance;
mod gamut;
mod generate;
mod hue;
mod peaks;
mod smoothing;

pub use self::{
    distance::{dist_in_ch, dist_perceptual, min_dist_in_ch, LIGHTNESS_WEIGHT},
    gamut::{avg_ch, bisect, clamp, linspace_ch, max_chroma, max_chroma_with, DEFAULT_TOLERANCE},
    generate::{generate, generate_with, LIGHTNESS_RANGE},
    hue::{avg_hue, diff_hue, hue_sorted, linspace_hue},
    peaks::{find_peaks, PeakDetectionError, PeakDetectionParams, Peaks, LEFT_HUE},
    smoothing::savgol_filter,
};
