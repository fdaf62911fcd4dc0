//! Application-wide constants.
//!
//! These are the defaults used when no configuration file is given.

/// Directory scanned for landscape wallpapers, relative to the working directory.
pub const LANDSCAPE_DIR: &str = "hb";

/// Directory scanned for portrait wallpapers, relative to the working directory.
pub const PORTRAIT_DIR: &str = "vb";

/// Composed wallpaper written every cycle and handed to the OS.
pub const OUTPUT_FILE: &str = "Current_background.jpg";

/// Delay between two wallpaper changes.
pub const CYCLE_INTERVAL_MS: u64 = 500;

/// Consecutive failed cycles tolerated before the loop gives up.
pub const MAX_CONSECUTIVE_FAILURES: u32 = 5;

/// JPEG quality of the composed wallpaper.
pub const JPEG_QUALITY: u8 = 95;
