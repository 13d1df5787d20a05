//! the main application
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod core;
pub mod logging;
pub mod session;

#[cfg(feature = "cli")]
pub use self::core::PaletteApp;
pub use session::{Command, Session};
