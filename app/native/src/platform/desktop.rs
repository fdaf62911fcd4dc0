//! Desktop wallpaper setting through the `wallpaper` crate.

use std::path::Path;

use super::{PlatformError, WallpaperSetter};

/// Applies wallpapers with the host desktop's native mechanism.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopWallpaper;

impl DesktopWallpaper {
    #[must_use]
    pub const fn new() -> Self { Self }
}

impl WallpaperSetter for DesktopWallpaper {
    fn apply(&mut self, path: &Path) -> Result<(), PlatformError> {
        if !path.exists() {
            return Err(PlatformError::FileNotFound(path.to_path_buf()));
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| PlatformError::SetWallpaper(format!("path is not valid UTF-8: {}", path.display())))?;

        wallpaper::set_from_path(path_str).map_err(|e| PlatformError::SetWallpaper(e.to_string()))
    }

    fn prefer_span(&mut self) -> Result<(), PlatformError> {
        wallpaper::set_mode(wallpaper::Mode::Span).map_err(|e| PlatformError::SetWallpaper(e.to_string()))
    }
}
