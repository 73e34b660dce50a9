use web_time::{Duration, Instant};

/// Frame pacing statistics for the animation loop.
///
/// Frame rate comes from the host's frame timestamps (so it reflects the
/// display cadence); step cost is measured with a wall clock around the
/// per-frame work.
pub struct FrameTiming {
    /// Host timestamp of the previous frame (ms).
    last_frame_ms: Option<f64>,
    /// Wall-clock start of the step currently being measured.
    step_started: Option<Instant>,
    /// Most recent step cost.
    last_step: Duration,
    /// Frames recorded so far.
    frames: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a frame timer with a 60 FPS prior.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame_ms: None,
            step_started: None,
            last_step: Duration::ZERO,
            frames: 0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call at the start of each frame with the host timestamp.
    pub fn begin_frame(&mut self, now_ms: f64) {
        self.step_started = Some(Instant::now());
        if let Some(last) = self.last_frame_ms {
            let frame_ms = now_ms - last;
            if frame_ms > 0.0 {
                let instant_fps = (1000.0 / frame_ms) as f32;
                self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                    + instant_fps * self.smoothing;
            }
        }
        self.last_frame_ms = Some(now_ms);
        self.frames += 1;
    }

    /// Call after the frame's work to record its cost.
    pub fn end_frame(&mut self) {
        if let Some(started) = self.step_started.take() {
            self.last_step = started.elapsed();
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames recorded since creation.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Wall-clock cost of the last completed frame.
    #[must_use]
    pub fn last_step(&self) -> Duration {
        self.last_step
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
