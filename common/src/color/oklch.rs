use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::color::{
    hex::Hex,
    oklab::OkLab,
    rgb::{LinearRgb, SRgb},
};

/// Cylindrical form of Oklab.
///
/// Chroma is stored per mille (Oklab `|(a, b)| * 1000`) and hue in degrees,
/// which makes euclidean distances in the chroma-hue plane meaningful
/// without further scaling.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OkLch<T> {
    pub l: T,
    pub c: T,
    pub h: T,
}

impl OkLch<f64> {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        OkLch { l, c, h }
    }

    pub fn to_oklab(&self) -> OkLab<f64> {
        let c = self.c / 1000.0;
        let h = self.h.to_radians();
        OkLab::new(self.l, c * h.cos(), c * h.sin())
    }

    pub fn to_linear_srgb(&self) -> LinearRgb<f64> {
        self.to_oklab().to_linear_srgb()
    }

    pub fn to_srgb(&self) -> SRgb<f64> {
        self.to_linear_srgb().to_srgb()
    }

    pub fn from_srgb(c: SRgb<f64>) -> Self {
        OkLab::from_linear_srgb(c.to_linear_rgb()).to_oklch()
    }

    pub fn to_hex(&self) -> Hex {
        Hex::from(self.to_srgb().to_u8())
    }

    pub fn in_gamut(&self) -> bool {
        self.to_linear_srgb().in_gamut()
    }
}

impl Display for OkLch<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.3} {:.1}‰ {:.1}°)", self.l, self.c, self.h)
    }
}

/// Wraps a hue in degrees into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HEXES: [&str; 8] = [
        "#fa4549", "#e16f24", "#bf8700", "#2da44e", "#339D9B", "#218bff", "#a475f9", "#4d2d00",
    ];

    #[test]
    fn srgb_to_oklch_to_srgb() {
        for hex in HEXES {
            let color = hex.parse::<Hex>().unwrap().to_srgb();
            let back = OkLch::from_srgb(color).to_srgb();
            assert!((color.r - back.r).abs() < 1e-6, "{hex}: red drifted");
            assert!((color.g - back.g).abs() < 1e-6, "{hex}: green drifted");
            assert!((color.b - back.b).abs() < 1e-6, "{hex}: blue drifted");
        }
    }

    #[test]
    fn white_has_unit_lightness() {
        let white = OkLch::from_srgb(SRgb::repeat(1.0));
        assert!((white.l - 1.0).abs() < 1e-4);
        assert!(white.c < 0.1);
    }

    #[test]
    fn hue_normalization() {
        assert_eq!(normalize_hue(-1e-18), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
    }

    proptest! {
        #[test]
        fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = Hex::from(SRgb::new(r, g, b));
            prop_assert_eq!(hex.to_oklch().to_hex(), hex);
        }

        #[test]
        fn hue_stays_in_range(h in -1e4f64..1e4) {
            let h = normalize_hue(h);
            prop_assert!((0.0..360.0).contains(&h));
        }
    }
}
