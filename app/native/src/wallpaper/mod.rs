//! Per-monitor wallpaper rotation.
//!
//! Startup discovers the monitors once ([`discover`]), giving each one a
//! shuffled rotation over the images matching its orientation. The
//! [`WallpaperLoop`] then repeatedly composes one image per monitor into a
//! single canvas, writes it to disk and applies it as the desktop
//! background.

mod cycle;
mod monitor;
mod pool;
mod render;
mod rotation;
mod topology;

pub use cycle::{CycleError, CycleState, WallpaperLoop};
pub use monitor::MonitorDescriptor;
pub use pool::{ImagePool, is_decodable_image};
pub use render::render;
pub use rotation::{Draw, RotationQueue};
pub use topology::{DiscoveryError, Topology, discover};
