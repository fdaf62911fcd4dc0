//! Startup monitor discovery.

use std::collections::HashMap;
use std::path::Path;

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use super::monitor::MonitorDescriptor;
use super::pool::ImagePool;
use crate::config::SplitwallConfig;
use crate::geometry::{Orientation, VirtualCanvas};
use crate::platform::{MonitorSource, PlatformError};

/// Errors that prevent the rotation from starting.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The OS reported no usable monitor.
    #[error("no monitors detected")]
    NoMonitors,
    /// The OS monitor query failed.
    #[error(transparent)]
    Enumeration(#[from] PlatformError),
}

/// Every monitor and the canvas that covers them all.
#[derive(Debug, Clone)]
pub struct Topology {
    monitors: Vec<MonitorDescriptor>,
    canvas: VirtualCanvas,
}

impl Topology {
    /// Monitors in the order the OS reported them.
    #[must_use]
    pub fn monitors(&self) -> &[MonitorDescriptor] { &self.monitors }

    #[must_use]
    pub const fn canvas(&self) -> &VirtualCanvas { &self.canvas }

    /// Splits the topology for rendering, which draws from the queues while
    /// reading the canvas.
    pub fn parts_mut(&mut self) -> (&mut [MonitorDescriptor], &VirtualCanvas) {
        (&mut self.monitors, &self.canvas)
    }
}

/// Queries `source` once and builds the topology.
///
/// Image directories from `config` are resolved against `base_dir`, and only
/// the orientations that are actually present get scanned. Every monitor
/// receives its own generator seeded from `rng`.
///
/// # Errors
///
/// Returns [`DiscoveryError::Enumeration`] if the OS query fails and
/// [`DiscoveryError::NoMonitors`] if no monitor with a non-zero area remains.
pub fn discover(
    source: &dyn MonitorSource,
    config: &SplitwallConfig,
    base_dir: &Path,
    rng: &mut impl RngCore,
) -> Result<Topology, DiscoveryError> {
    let raw_monitors = source.monitors()?;

    let mut pools: HashMap<Orientation, ImagePool> = HashMap::new();
    let mut monitors = Vec::with_capacity(raw_monitors.len());

    for raw in raw_monitors {
        if raw.rect.is_empty() {
            tracing::warn!(monitor = %raw.id, "ignoring monitor with zero area");
            continue;
        }

        let orientation = raw.rect.orientation();
        let pool = pools
            .entry(orientation)
            .or_insert_with(|| scan_pool(config, orientation, base_dir))
            .clone();

        monitors.push(MonitorDescriptor::from_raw(raw, pool, StdRng::from_rng(rng)));
    }

    let Some(canvas) = VirtualCanvas::bounding(monitors.iter().map(MonitorDescriptor::rect)) else {
        return Err(DiscoveryError::NoMonitors);
    };

    tracing::info!(
        monitors = monitors.len(),
        origin_x = canvas.origin_x,
        origin_y = canvas.origin_y,
        width = canvas.width,
        height = canvas.height,
        "discovered monitor topology"
    );
    for monitor in &monitors {
        tracing::info!(
            monitor = %monitor.name(),
            x = monitor.x(),
            y = monitor.y(),
            width = monitor.width(),
            height = monitor.height(),
            orientation = %monitor.orientation(),
            images = monitor.queue().pool_len(),
            "monitor"
        );
    }

    Ok(Topology { monitors, canvas })
}

fn scan_pool(config: &SplitwallConfig, orientation: Orientation, base_dir: &Path) -> ImagePool {
    let dir = config.directory_for(orientation, base_dir);
    let pool = ImagePool::scan(&dir);
    if pool.is_empty() {
        tracing::warn!(
            dir = %dir.display(),
            %orientation,
            "no images found; affected monitors will stay black"
        );
    }
    pool
}
