//! Per-monitor state owned by the rotation loop.

use rand::rngs::StdRng;

use super::pool::ImagePool;
use super::rotation::{Draw, RotationQueue};
use crate::geometry::{Orientation, Rect};
use crate::platform::RawMonitor;

/// One physical monitor and its private rotation.
///
/// Geometry and orientation are fixed at startup; only the queue changes.
#[derive(Debug, Clone)]
pub struct MonitorDescriptor {
    name: String,
    rect: Rect,
    orientation: Orientation,
    queue: RotationQueue,
}

impl MonitorDescriptor {
    /// Builds a descriptor for `raw`, drawing from `pool` with `rng`.
    #[must_use]
    pub fn from_raw(raw: RawMonitor, pool: ImagePool, rng: StdRng) -> Self {
        Self {
            name: raw.id,
            orientation: raw.rect.orientation(),
            rect: raw.rect,
            queue: RotationQueue::new(pool, rng),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub const fn rect(&self) -> &Rect { &self.rect }

    #[must_use]
    pub const fn x(&self) -> i32 { self.rect.left() }

    #[must_use]
    pub const fn y(&self) -> i32 { self.rect.top() }

    #[must_use]
    pub const fn width(&self) -> u32 { self.rect.width() }

    #[must_use]
    pub const fn height(&self) -> u32 { self.rect.height() }

    #[must_use]
    pub const fn orientation(&self) -> Orientation { self.orientation }

    #[must_use]
    pub const fn queue(&self) -> &RotationQueue { &self.queue }

    /// Draws this monitor's next image.
    pub fn next_image(&mut self) -> Draw { self.queue.next() }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_from_raw_portrait() {
        let raw = RawMonitor::new("HDMI-1", Rect::from_origin_size(1920, 0, 1080, 1920));
        let monitor = MonitorDescriptor::from_raw(raw, ImagePool::default(), StdRng::seed_from_u64(0));

        assert_eq!(monitor.name(), "HDMI-1");
        assert_eq!((monitor.x(), monitor.y()), (1920, 0));
        assert_eq!((monitor.width(), monitor.height()), (1080, 1920));
        assert_eq!(monitor.orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_square_monitor_is_landscape() {
        let raw = RawMonitor::new("sq", Rect::from_origin_size(0, 0, 1000, 1000));
        let monitor = MonitorDescriptor::from_raw(raw, ImagePool::default(), StdRng::seed_from_u64(0));
        assert_eq!(monitor.orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_next_image_draws_from_queue() {
        let pool = ImagePool::from_paths([PathBuf::from("/only.png")]);
        let raw = RawMonitor::new("DP-1", Rect::from_origin_size(0, 0, 1920, 1080));
        let mut monitor = MonitorDescriptor::from_raw(raw, pool, StdRng::seed_from_u64(0));

        assert_eq!(monitor.next_image(), Draw::Image(PathBuf::from("/only.png")));
        assert_eq!(monitor.queue().pool_len(), 1);
    }
}
