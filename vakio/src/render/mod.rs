//! Raster and vector renditions of the palette and of the gamut it is cut
//! from.

pub mod gamut;
pub mod swatches;
