//! Shuffle-without-replacement rotation over an [`ImagePool`].

use std::path::PathBuf;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::pool::ImagePool;

/// The outcome of drawing from a [`RotationQueue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draw {
    /// The next image to show.
    Image(PathBuf),
    /// The pool is empty; the monitor gets a black placeholder.
    NoImage,
}

/// A per-monitor deck of not-yet-shown images.
///
/// Every image in the pool is drawn exactly once before any image is drawn
/// again. When the deck runs out it is refilled with a fresh shuffle of the
/// whole pool. With two or more images, the first draw after a refill never
/// repeats the last draw before it.
#[derive(Debug, Clone)]
pub struct RotationQueue {
    pool: ImagePool,
    deck: Vec<PathBuf>,
    rng: StdRng,
    last: Option<PathBuf>,
}

impl RotationQueue {
    /// Creates a queue over `pool` with an initial shuffled deck.
    #[must_use]
    pub fn new(pool: ImagePool, rng: StdRng) -> Self {
        let mut queue = Self {
            pool,
            deck: Vec::new(),
            rng,
            last: None,
        };
        queue.refill();
        queue
    }

    /// Draws the next image, refilling the deck if it is exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Draw {
        if self.pool.is_empty() {
            return Draw::NoImage;
        }

        if self.deck.is_empty() {
            self.refill();
        }

        match self.deck.pop() {
            Some(path) => {
                self.last = Some(path.clone());
                Draw::Image(path)
            }
            None => Draw::NoImage,
        }
    }

    /// Images left in the current deck.
    #[must_use]
    pub fn remaining(&self) -> usize { self.deck.len() }

    /// Size of the underlying pool.
    #[must_use]
    pub fn pool_len(&self) -> usize { self.pool.len() }

    fn refill(&mut self) {
        self.deck.clear();
        self.deck.extend_from_slice(self.pool.images());
        self.deck.shuffle(&mut self.rng);

        // The deck pops from the back; keep the previous draw away from it.
        let len = self.deck.len();
        if len > 1 && self.last.as_ref() == self.deck.last() {
            let swap_with = self.rng.random_range(0..len - 1);
            self.deck.swap(swap_with, len - 1);
        }

        tracing::trace!(size = len, "refilled rotation deck");
    }
}
