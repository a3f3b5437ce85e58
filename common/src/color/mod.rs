mod hex;
mod oklab;
mod oklch;
mod rgb;

pub use self::{
    hex::{Hex, ParseHexError},
    oklab::OkLab,
    oklch::{normalize_hue, OkLch},
    rgb::{LinearRgb, SRgb},
};
