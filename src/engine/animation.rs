//! Animation methods for FolioEngine

use super::effect::Frame;
use super::FolioEngine;

/// Frames between frame-rate trace lines.
const FPS_LOG_INTERVAL: u64 = 600;

impl FolioEngine {
    /// Advance the animation by one host frame.
    ///
    /// Steps every card's drift + magnet smoothing and the swipe override
    /// for `timestamp_ms`, all inside this one call. Returns `None` while
    /// the loop is idle or after [`stop`](Self::stop).
    pub fn tick(&mut self, timestamp_ms: f64) -> Option<Frame> {
        if !self.motion.is_running() {
            return None;
        }
        self.timing.begin_frame(timestamp_ms);
        let cards = self.motion.tick(timestamp_ms)?;
        let drag = self.swipe.visual(timestamp_ms);
        self.timing.end_frame();

        if self.timing.frames() % FPS_LOG_INTERVAL == 0 {
            log::trace!(
                "frame {}: {:.1} fps, step {:?}",
                self.timing.frames(),
                self.timing.fps(),
                self.timing.last_step()
            );
        }
        Some(Frame {
            timestamp_ms,
            cards,
            drag,
        })
    }

    /// Cancel the animation loop for good. Controllers keep working.
    pub fn stop(&mut self) {
        self.motion.stop();
    }

    /// Whether the host should keep scheduling frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_running()
    }
}
