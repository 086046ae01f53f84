/// Default averaging window for the FPS readout, in seconds
pub const FPS_SAMPLE_INTERVAL: f32 = 0.25;

/// Frame-rate counter - accumulates frame deltas and reports the average
/// rate once per sampling window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    accumulator: f32,
    frames: u32,
    last_fps: Option<f32>,
}

impl FpsCounter {
    /// Counter that reports every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            frames: 0,
            last_fps: None,
        }
    }

    /// Record one frame that took `delta` seconds.
    ///
    /// Returns the average FPS when a sampling window completes.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.accumulator += delta;

        if self.accumulator < self.interval {
            return None;
        }

        let fps = self.frames as f32 / self.accumulator;
        self.frames = 0;
        self.accumulator = 0.0;
        self.last_fps = Some(fps);
        Some(fps)
    }

    /// Most recent reported FPS
    pub fn fps(&self) -> Option<f32> {
        self.last_fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(FPS_SAMPLE_INTERVAL)
    }
}

/// Window title carrying the frame rate
pub fn fps_title(title: &str, fps: f32) -> String {
    format!("{} @ fps: {:.1}", title, fps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_reports_after_interval() {
        let mut counter = FpsCounter::new(0.25);

        assert_eq!(counter.tick(0.1), None);
        assert_eq!(counter.tick(0.1), None);
        assert_eq!(counter.fps(), None);

        let fps = counter.tick(0.1).unwrap();
        assert!((fps - 10.0).abs() < 1e-3);
        assert_eq!(counter.fps(), Some(fps));
    }

    #[test]
    fn fps_window_restarts_after_report() {
        let mut counter = FpsCounter::new(0.25);
        assert!(counter.tick(0.5).is_some());

        // New window - a single short frame must not report
        assert_eq!(counter.tick(0.01), None);
    }

    #[test]
    fn fps_title_format() {
        assert_eq!(fps_title("Sandbox", 59.94), "Sandbox @ fps: 59.9");
    }
}
