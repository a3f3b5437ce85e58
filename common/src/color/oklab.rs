#![allow(clippy::excessive_precision)]

// Reference: https://bottosson.github.io/posts/oklab/

use serde::{Deserialize, Serialize};

use crate::color::{
    oklch::{normalize_hue, OkLch},
    rgb::LinearRgb,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OkLab<T> {
    pub l: T,
    pub a: T,
    pub b: T,
}

impl OkLab<f64> {
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        OkLab { l, a, b }
    }

    #[rustfmt::skip]
    pub fn to_linear_srgb(&self) -> LinearRgb<f64> {
        let l = self.l + 0.3963377774 * self.a + 0.2158037573 * self.b;
        let m = self.l - 0.1055613458 * self.a - 0.0638541728 * self.b;
        let s = self.l - 0.0894841775 * self.a - 1.2914855480 * self.b;

        let l = l * l * l;
        let m = m * m * m;
        let s = s * s * s;

        LinearRgb {
            r:  4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }

    #[rustfmt::skip]
    pub fn from_linear_srgb(c: LinearRgb<f64>) -> Self {
        let l = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
        let m = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
        let s = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

        let l = l.cbrt();
        let m = m.cbrt();
        let s = s.cbrt();

        OkLab {
            l: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
            a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
            b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
        }
    }

    /// Chroma is reported per mille and hue in degrees within `[0, 360)`.
    pub fn to_oklch(&self) -> OkLch<f64> {
        let c = 1000.0 * self.a.hypot(self.b);
        let h = normalize_hue(self.b.atan2(self.a).to_degrees());
        OkLch::new(self.l, c, h)
    }
}
