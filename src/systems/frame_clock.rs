//! Fixed-interval frame pacing and frame rate measurement

use std::time::{Duration, Instant};

/// Length of the window over which frame rate is averaged
const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Schedules frames at a fixed interval and measures the achieved rate
///
/// The event loop sleeps until [`FrameClock::next_deadline`]; each rendered
/// frame calls [`FrameClock::tick`]. If the loop falls behind by more than one
/// interval the schedule restarts from now instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next_frame: Instant,
    window_start: Instant,
    window_frames: u32,
    fps: f32,
}

impl FrameClock {
    /// Create a clock with `interval` seconds between frames, first frame due now
    pub fn new(interval: f32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f32(interval),
            next_frame: now,
            window_start: now,
            window_frames: 0,
            fps: 0.0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next frame should start
    pub fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    /// Whether a frame is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Record a frame at `now` and schedule the next one
    ///
    /// Returns the averaged frame rate whenever a measurement window closes.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.next_frame += self.interval;
        if self.next_frame + self.interval < now {
            self.next_frame = now + self.interval;
        }

        self.window_frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= FPS_WINDOW {
            self.fps = self.window_frames as f32 / elapsed.as_secs_f32();
            self.window_frames = 0;
            self.window_start = now;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last measured frame rate (0 until the first window closes)
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
