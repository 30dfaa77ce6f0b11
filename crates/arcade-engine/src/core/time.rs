/// Frame limiter for host-driven animation callbacks.
///
/// The host calls [`FrameLimiter::tick`] on every display refresh. A tick is
/// accepted only once a full frame period has elapsed since the last accepted
/// one, so the simulation rate stays fixed regardless of the refresh rate.
/// Time is in milliseconds, as reported by `performance.now()`.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    /// Target period between accepted ticks.
    ms_per_frame: f64,
    /// Timestamp of the last accepted tick, aligned to the period grid.
    ms_prev: Option<f64>,
    /// Accepted ticks since the last fps window closed.
    frames: u32,
    /// Start of the current fps window.
    last_fps_update: f64,
    /// Length of an fps window.
    fps_update_interval: f64,
    /// Observed ticks per second over the last closed window.
    actual_fps: u32,
}

impl FrameLimiter {
    pub fn new(fps: f64) -> Self {
        Self {
            ms_per_frame: 1000.0 / fps,
            ms_prev: None,
            frames: 0,
            last_fps_update: 0.0,
            fps_update_interval: 1000.0,
            actual_fps: 0,
        }
    }

    /// Returns true when a new tick should run at `ms_now`.
    ///
    /// The first call only anchors the clock. Rejected calls have no side effects.
    pub fn tick(&mut self, ms_now: f64) -> bool {
        let ms_prev = match self.ms_prev {
            Some(prev) => prev,
            None => {
                self.ms_prev = Some(ms_now);
                self.last_fps_update = ms_now;
                return false;
            }
        };

        let ms_passed = ms_now - ms_prev;
        if ms_passed < self.ms_per_frame {
            return false;
        }

        let excess = ms_passed % self.ms_per_frame;
        self.ms_prev = Some(ms_now - excess);

        self.frames += 1;
        let window = ms_now - self.last_fps_update;
        if window >= self.fps_update_interval {
            self.actual_fps = (self.frames as f64 / (window / 1000.0)).round() as u32;
            log::trace!("fps window closed: {} frames in {:.1}ms", self.frames, window);
            self.frames = 0;
            self.last_fps_update = ms_now;
        }

        true
    }

    /// Forget the anchor; the next call to `tick` re-anchors without ticking.
    pub fn reset(&mut self) {
        self.ms_prev = None;
        self.frames = 0;
    }

    pub fn ms_per_frame(&self) -> f64 {
        self.ms_per_frame
    }

    /// Timestamp of the last accepted tick, if the clock is anchored.
    pub fn last_tick(&self) -> Option<f64> {
        self.ms_prev
    }

    /// Observed fps over the last full one-second window (0 before the first window closes).
    pub fn actual_fps(&self) -> u32 {
        self.actual_fps
    }
}
