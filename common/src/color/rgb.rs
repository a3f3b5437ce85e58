// Reference: https://www.w3.org/Graphics/Color/srgb

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinearRgb<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SRgb<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

impl<T> LinearRgb<T> {
    pub fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }
}

impl<T> SRgb<T> {
    pub fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    pub fn map<U, F: Fn(T) -> U>(self, f: F) -> SRgb<U> {
        SRgb {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

impl LinearRgb<f64> {
    /// Converts to gamma encoded sRGB, clipping each channel to `[0, 1]`.
    pub fn to_srgb(&self) -> SRgb<f64> {
        fn convert(v: f64) -> f64 {
            let v = if v >= 0.0031308 {
                1.055 * v.powf(1.0 / 2.4) - 0.055
            } else {
                12.92 * v
            };
            v.clamp(0.0, 1.0)
        }

        SRgb {
            r: convert(self.r),
            g: convert(self.g),
            b: convert(self.b),
        }
    }

    /// Strict containment check used by the gamut search. Colors touching
    /// the faces of the RGB cube are considered outside.
    pub fn in_gamut(&self) -> bool {
        self.r.min(self.g.min(self.b)) > 0.0 && self.r.max(self.g.max(self.b)) < 1.0
    }

    /// Replaces out of gamut colors with black.
    pub fn masked(self) -> Self {
        if self.in_gamut() {
            self
        } else {
            Self::repeat(0.0)
        }
    }
}

impl SRgb<f64> {
    pub fn to_linear_rgb(&self) -> LinearRgb<f64> {
        fn convert(v: f64) -> f64 {
            if v >= 0.04045 {
                ((v + 0.055) / 1.055).powf(2.4)
            } else {
                v / 12.92
            }
        }

        LinearRgb {
            r: convert(self.r),
            g: convert(self.g),
            b: convert(self.b),
        }
    }

    pub fn to_u8(&self) -> SRgb<u8> {
        self.map(|x| (x.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl SRgb<u8> {
    pub fn to_f64(&self) -> SRgb<f64> {
        self.map(|x| x as f64 / 255.0)
    }
}

impl<T: Copy> LinearRgb<T> {
    pub fn repeat(v: T) -> Self {
        Self::new(v, v, v)
    }
}

impl<T: Copy> SRgb<T> {
    pub fn repeat(v: T) -> Self {
        Self::new(v, v, v)
    }
}
