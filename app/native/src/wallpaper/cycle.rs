//! The render, persist, apply, wait loop.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use tempfile::NamedTempFile;
use thiserror::Error;

use super::render;
use super::topology::Topology;
use crate::config::{ResizeMode, SplitwallConfig};
use crate::platform::{PlatformError, WallpaperSetter};

/// Errors raised while producing or applying a wallpaper.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Writing the composed wallpaper to disk failed.
    #[error("failed to write {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JPEG encoding failed.
    #[error("failed to encode wallpaper: {0}")]
    Encode(#[from] image::ImageError),
    /// The OS rejected the wallpaper.
    #[error(transparent)]
    Apply(#[from] PlatformError),
    /// Too many cycles in a row failed.
    #[error("giving up after {failures} consecutive failed cycles")]
    TooManyFailures { failures: u32 },
}

/// One step of the loop. Each state carries what the next step consumes.
#[derive(Debug)]
pub enum CycleState {
    Render,
    Persist(RgbImage),
    Apply(PathBuf),
    Wait,
}

/// Drives the wallpaper rotation.
///
/// Owns the topology (and through it every rotation queue), the setter, and
/// the output file.
#[derive(Debug)]
pub struct WallpaperLoop<S: WallpaperSetter> {
    topology: Topology,
    setter: S,
    output_path: PathBuf,
    interval: Duration,
    resize: ResizeMode,
    jpeg_quality: u8,
    max_consecutive_failures: u32,
    consecutive_failures: u32,
}

impl<S: WallpaperSetter> WallpaperLoop<S> {
    /// Creates a loop writing to the configured output file, resolved against
    /// `base_dir`. The setter receives that path, so `base_dir` should be
    /// absolute.
    #[must_use]
    pub fn new(topology: Topology, setter: S, config: &SplitwallConfig, base_dir: &Path) -> Self {
        Self {
            topology,
            setter,
            output_path: config.output_path(base_dir),
            interval: config.interval(),
            resize: config.resize,
            jpeg_quality: config.jpeg_quality,
            max_consecutive_failures: config.max_consecutive_failures,
            consecutive_failures: 0,
        }
    }

    #[must_use]
    pub const fn topology(&self) -> &Topology { &self.topology }

    #[must_use]
    pub const fn setter(&self) -> &S { &self.setter }

    #[must_use]
    pub fn output_path(&self) -> &Path { &self.output_path }

    #[must_use]
    pub const fn consecutive_failures(&self) -> u32 { self.consecutive_failures }

    /// Composes the next wallpaper, advancing every monitor's rotation.
    pub fn render(&mut self) -> RgbImage {
        let resize = self.resize;
        let (monitors, canvas) = self.topology.parts_mut();
        render::render(monitors, canvas, resize)
    }

    /// Encodes `image` as JPEG and atomically replaces the output file.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::Persist`] on I/O failure and
    /// [`CycleError::Encode`] if encoding fails.
    pub fn persist(&self, image: &RgbImage) -> Result<PathBuf, CycleError> {
        let persist_error = |source| CycleError::Persist {
            path: self.output_path.clone(),
            source,
        };

        // The temp file must share the target's filesystem for the rename.
        let parent = match self.output_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(parent).map_err(persist_error)?;

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            let encoder = JpegEncoder::new_with_quality(&mut writer, self.jpeg_quality);
            image.write_with_encoder(encoder)?;
            writer.flush().map_err(persist_error)?;
        }

        temp.persist(&self.output_path).map_err(|err| persist_error(err.error))?;
        Ok(self.output_path.clone())
    }

    /// Hands the file at `path` to the OS.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::Apply`] if the setter fails.
    pub fn apply(&mut self, path: &Path) -> Result<(), CycleError> {
        self.setter.apply(path)?;
        Ok(())
    }

    /// Runs render, persist and apply once without waiting.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error. The failure counter is not
    /// touched.
    pub fn run_cycle(&mut self) -> Result<PathBuf, CycleError> {
        let image = self.render();
        let path = self.persist(&image)?;
        self.apply(&path)?;
        Ok(path)
    }

    /// Runs the loop, forever when `cycles` is `None`.
    ///
    /// A failed persist or apply is logged and retried after the normal wait.
    /// No sleep follows the last of a bounded number of cycles.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::TooManyFailures`] once more than
    /// `max_consecutive_failures` cycles in a row have failed.
    pub fn run(&mut self, cycles: Option<u64>) -> Result<(), CycleError> {
        if let Err(err) = self.setter.prefer_span() {
            tracing::warn!(error = %err, "could not switch desktop to span mode");
        }

        tracing::info!(
            output = %self.output_path.display(),
            interval_ms = self.interval.as_millis(),
            "starting wallpaper rotation"
        );

        let mut completed: u64 = 0;
        let mut state = CycleState::Render;
        loop {
            state = match state {
                CycleState::Render => CycleState::Persist(self.render()),
                CycleState::Persist(image) => match self.persist(&image) {
                    Ok(path) => CycleState::Apply(path),
                    Err(err) => {
                        self.record_failure(&err)?;
                        CycleState::Wait
                    }
                },
                CycleState::Apply(path) => {
                    match self.apply(&path) {
                        Ok(()) => self.record_success(completed),
                        Err(err) => self.record_failure(&err)?,
                    }
                    CycleState::Wait
                }
                CycleState::Wait => {
                    completed += 1;
                    if cycles.is_some_and(|limit| completed >= limit) {
                        return Ok(());
                    }
                    std::thread::sleep(self.interval);
                    CycleState::Render
                }
            };
        }
    }

    fn record_success(&mut self, cycle: u64) {
        if self.consecutive_failures > 0 {
            tracing::info!(after = self.consecutive_failures, "wallpaper cycle recovered");
        }
        self.consecutive_failures = 0;
        tracing::debug!(cycle, "applied wallpaper");
    }

    fn record_failure(&mut self, err: &CycleError) -> Result<(), CycleError> {
        self.consecutive_failures += 1;
        tracing::error!(
            error = %err,
            consecutive = self.consecutive_failures,
            "wallpaper cycle failed"
        );

        if self.consecutive_failures > self.max_consecutive_failures {
            return Err(CycleError::TooManyFailures {
                failures: self.consecutive_failures,
            });
        }
        Ok(())
    }
}
