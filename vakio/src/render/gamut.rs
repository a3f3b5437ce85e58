use common::color::OkLch;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};
use rayon::iter::ParallelIterator;
use tracing::debug;

use crate::alg::{min_dist_in_ch, LEFT_HUE};

/// Highest chroma shown, per mille. Both axes cover 360 units so distances
/// in the chroma-hue plane are drawn to scale.
const CHROMA_RANGE: f64 = 360.0;

const BORDER: Rgb<u8> = Rgb([128, 128, 128]);

/// The sRGB gamut at lightness `l` as a `size` by `size` image.
///
/// Hue runs left to right from [`LEFT_HUE`] through a full turn, chroma
/// bottom to top from zero. Colors outside the gamut are black.
pub fn render_slice(l: f64, size: u32) -> RgbImage {
    let mut image = RgbImage::new(size, size);
    image
        .par_enumerate_pixels_mut()
        .for_each(|(x, y, pixel)| {
            let (h, c) = from_pixel(x, y, size);
            let srgb = OkLch::new(l, c, h)
                .to_linear_srgb()
                .masked()
                .to_srgb()
                .to_u8();
            *pixel = Rgb([srgb.r, srgb.g, srgb.b]);
        });

    debug!(lightness = l, size, "Rendered gamut slice");
    image
}

/// Marks `colors` on a slice from [`render_slice`]. With `show_separation`
/// every color is circled with the smallest distance between any two of
/// them, so overlapping circles never occur.
pub fn draw_colors(image: &mut RgbImage, colors: &[OkLch<f64>], show_separation: bool) {
    let size = image.width();
    let outer = (size / 90).max(3) as i32;
    let inner = (outer - 2).max(1);

    if show_separation && colors.len() > 1 {
        let radius = (min_dist_in_ch(colors) * size as f64 / CHROMA_RANGE).round() as i32;
        for color in colors {
            let (x, y) = to_pixel(color, size);
            // Circles crossing the hue seam reappear on the other side.
            for offset in [-(size as i32), 0, size as i32] {
                let x = x + offset;
                if x + radius >= 0 && x - radius < size as i32 {
                    draw_hollow_circle_mut(image, (x, y), radius, BORDER);
                }
            }
        }
    }

    for color in colors {
        let center = to_pixel(color, size);
        let srgb = color.to_srgb().to_u8();
        draw_filled_circle_mut(image, center, outer, BORDER);
        draw_filled_circle_mut(image, center, inner, Rgb([srgb.r, srgb.g, srgb.b]));
    }
}

/// Hue and chroma at the center of a pixel.
fn from_pixel(x: u32, y: u32, size: u32) -> (f64, f64) {
    let size = size as f64;
    let h = LEFT_HUE + 360.0 * (x as f64 + 0.5) / size;
    let c = CHROMA_RANGE * (1.0 - (y as f64 + 0.5) / size);
    (h, c)
}

fn to_pixel(color: &OkLch<f64>, size: u32) -> (i32, i32) {
    let size = size as f64;
    let x = (color.h - LEFT_HUE).rem_euclid(360.0) / 360.0 * size;
    let y = (1.0 - color.c / CHROMA_RANGE) * size;
    (x.floor() as i32, y.floor() as i32)
}
