use std::time::Instant;

/// Timing of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Frame counter, starting at 0
    pub number: u64,
    /// Seconds since the clock started
    pub elapsed: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

/// Monotonic frame clock - yields the delta time fed to camera movement
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock whose first frame starts at `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last_tick: start,
            frame_number: 0,
        }
    }

    /// Advance to a new frame now
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advance to a new frame observed at `now`.
    ///
    /// An instant earlier than the previous tick yields a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let frame = FrameTime {
            number: self.frame_number,
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            delta: now.saturating_duration_since(self.last_tick).as_secs_f32(),
        };

        if now > self.last_tick {
            self.last_tick = now;
        }
        self.frame_number += 1;
        frame
    }

    /// Restart delta measurement from now, e.g. after the window regains focus
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let frame = clock.tick_at(start + Duration::from_millis(10));
        assert_eq!(frame.number, 0);
        assert!((frame.delta - 0.010).abs() < 1e-6);

        let frame = clock.tick_at(start + Duration::from_millis(25));
        assert_eq!(frame.number, 1);
        assert!((frame.delta - 0.015).abs() < 1e-6);
        assert!((frame.elapsed - 0.025).abs() < 1e-6);
    }

    #[test]
    fn clock_never_goes_backwards() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start + Duration::from_millis(50));

        let frame = clock.tick_at(start);
        assert_eq!(frame.delta, 0.0);
        assert_eq!(frame.elapsed, 0.0);
    }

    #[test]
    fn clock_resets() {
        let mut clock = FrameClock::starting_at(Instant::now() - Duration::from_secs(5));
        clock.reset();

        let frame = clock.tick();
        // Should be very small since we just reset
        assert!(frame.delta < 0.5);
        assert!(frame.elapsed >= 5.0);
        assert_eq!(clock.frame_number(), 1);
    }
}
