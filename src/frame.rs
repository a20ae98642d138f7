use std::time::Instant;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the previous frame (or since the timer started)
    pub delta: f32,
    /// Set on the frame that completes a measurement window
    pub fps: Option<f32>,
}

/// Per-frame delta time plus a rolling frames-per-second estimate
#[derive(Debug)]
pub struct FrameTimer {
    frame_number: u64,
    last_frame_time: Instant,
    window_frames: u32,
    window_elapsed: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            frame_number: 0,
            last_frame_time: Instant::now(),
            window_frames: 0,
            window_elapsed: 0.0,
        }
    }

    /// Advance to the next frame
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        let info = FrameInfo {
            number: self.frame_number,
            delta,
            fps: self.record_fps(delta),
        };
        self.frame_number += 1;

        info
    }

    fn record_fps(&mut self, delta: f32) -> Option<f32> {
        self.window_frames += 1;
        self.window_elapsed += delta;

        if self.window_elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }

        let fps = self.window_frames as f32 / self.window_elapsed;
        log::debug!("FPS: {fps:.1}");
        self.window_frames = 0;
        self.window_elapsed = 0.0;
        Some(fps)
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
