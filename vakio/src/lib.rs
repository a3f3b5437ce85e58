//! Derivation of the Vakio palette: colors of maximal chroma at two Oklch
//! lightness levels, a tinted grey ramp and a few hand-picked colors, indexed
//! by semantic role.

pub mod alg;
pub mod export;
pub mod layout;
pub mod metadata;
pub mod palette;
pub mod render;

pub use palette::{create_palette, Palette};
