//! Splitwall - a different wallpaper on every monitor.
//!
//! Operating systems that only accept one desktop background for all screens
//! get a composed image instead: every monitor draws its next picture from a
//! shuffled rotation matching its orientation, the pictures are pasted at the
//! monitors' positions on one canvas, and the canvas is applied as a spanned
//! wallpaper.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod platform;
pub mod schema;
pub mod wallpaper;

pub use error::SplitwallError;
