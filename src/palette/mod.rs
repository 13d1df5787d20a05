//! palette generation stuff
pub mod generator;
pub mod hsl;

pub use {
    generator::{PaletteGenerator, PaletteMode, PaletteSeeds, generate},
    hsl::{Hsl, hsl_to_hex},
};
