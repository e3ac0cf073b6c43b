use std::time::{Duration, Instant};

/// Delay between the end of one frame and the start of the next.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Fixed-delay frame pacing.
///
/// A frame becomes due `interval` after the previous frame was presented,
/// which caps the loop at roughly `1 / interval` frames per second without
/// trying to catch up on late frames. The first frame is due immediately.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Option<Instant>,
    frames: u64,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_frame: None,
            frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the next frame should be rendered at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_frame.is_none_or(|deadline| now >= deadline)
    }

    /// When the next frame becomes due, or `None` before the first frame.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_frame
    }

    /// Record that a frame finished presenting at `now`.
    pub fn frame_presented(&mut self, now: Instant) {
        self.frames += 1;
        self.next_frame = Some(now + self.interval);
        tracing::trace!(frame = self.frames, "frame presented");
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Frame time tracker for instrumentation.
#[derive(Debug)]
pub struct FrameTimer {
    history: Vec<Duration>,
    capacity: usize,
    index: usize,
    filled: bool,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: vec![Duration::ZERO; capacity],
            capacity,
            index: 0,
            filled: false,
        }
    }

    pub fn record(&mut self, dt: Duration) {
        self.history[self.index] = dt;
        self.index = (self.index + 1) % self.capacity;
        if self.index == 0 {
            self.filled = true;
        }
    }

    pub fn average(&self) -> Duration {
        let count = self.count();
        if count == 0 {
            return Duration::ZERO;
        }
        let total: Duration = self.history[..count].iter().sum();
        total / count as u32
    }

    pub fn max(&self) -> Duration {
        self.history[..self.count()]
            .iter()
            .copied()
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn count(&self) -> usize {
        if self.filled {
            self.capacity
        } else {
            self.index
        }
    }

    /// Frames per second implied by the average frame time.
    pub fn fps(&self) -> f32 {
        let avg = self.average().as_secs_f32();
        if avg > 0.0 { 1.0 / avg } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_due_immediately() {
        let pacer = FramePacer::default();
        assert!(pacer.is_due(Instant::now()));
        assert_eq!(pacer.next_deadline(), None);
        assert_eq!(pacer.interval(), Duration::from_millis(50));
    }

    #[test]
    fn next_frame_waits_one_interval_after_present() {
        let mut pacer = FramePacer::new(Duration::from_millis(50));
        let t0 = Instant::now();
        pacer.frame_presented(t0);

        assert!(!pacer.is_due(t0));
        assert!(!pacer.is_due(t0 + Duration::from_millis(49)));
        assert!(pacer.is_due(t0 + Duration::from_millis(50)));
        assert_eq!(pacer.next_deadline(), Some(t0 + Duration::from_millis(50)));
        assert_eq!(pacer.frames(), 1);
    }

    #[test]
    fn late_frames_do_not_accumulate_debt() {
        let mut pacer = FramePacer::new(Duration::from_millis(50));
        let t0 = Instant::now();
        pacer.frame_presented(t0);
        // Frame rendered half a second late; the next one is still a full interval out.
        let late = t0 + Duration::from_millis(500);
        pacer.frame_presented(late);
        assert!(!pacer.is_due(late + Duration::from_millis(10)));
        assert_eq!(pacer.frames(), 2);
    }

    #[test]
    fn frame_timer_tracks_history() {
        let mut timer = FrameTimer::new(3);
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(20));
        timer.record(Duration::from_millis(30));

        assert_eq!(timer.count(), 3);
        assert_eq!(timer.average(), Duration::from_millis(20));
        assert_eq!(timer.max(), Duration::from_millis(30));
    }

    #[test]
    fn frame_timer_wraps_around() {
        let mut timer = FrameTimer::new(2);
        timer.record(Duration::from_millis(40));
        timer.record(Duration::from_millis(50));
        timer.record(Duration::from_millis(60)); // overwrites first

        assert_eq!(timer.count(), 2);
        assert_eq!(timer.average(), Duration::from_millis(55));
    }

    #[test]
    fn frame_timer_fps() {
        let mut timer = FrameTimer::new(4);
        assert_eq!(timer.fps(), 0.0);
        timer.record(Duration::from_millis(50));
        assert!((timer.fps() - 20.0).abs() < 1e-3);
    }
}
