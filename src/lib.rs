//! palettecss is a terminal color-theme editor
//!
//! it generates random CSS palettes from a primary hue, lets you edit them token by token and
//! exports them as CSS custom properties or JSON
#![forbid(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod macros;
pub mod palette;
pub mod theme;
pub mod utils;

pub use {
    error::{PaletteError, Result},
    export::ExportFormat,
    palette::{PaletteGenerator, PaletteMode, generate, hsl_to_hex},
    theme::{SharedThemeStore, Theme, ThemePatch, ThemeStore, Token, TokenGroup},
};
