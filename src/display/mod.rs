//! terminal rendering of themes
pub mod color;
pub mod preview;

pub use preview::Preview;
