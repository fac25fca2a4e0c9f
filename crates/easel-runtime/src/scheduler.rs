//! Fixed-rate frame scheduler.
//!
//! The host calls [`FrameScheduler::run_frame`] on every animation-frame
//! opportunity. A tick fires when more than one target interval has passed
//! since the last tick. The last-tick timestamp is then phase-corrected
//! (`now - elapsed % interval`) instead of reset to `now`, so cadence holds
//! after a slow frame.
//!
//! A stall is a temporal skip, not a replay: however many intervals were
//! missed, the next opportunity fires exactly one tick.

use crate::drawable::Drawable;
use easel_core::{Backend, RenderSurface};

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    target_interval_ms: f64,
    start_ms: f64,
    last_tick_ms: f64,
    tick_count: u64,
    observed_fps: f64,
}

impl FrameScheduler {
    /// Target `fps` ticks per second.
    pub fn new(fps: f64) -> Self {
        Self::with_interval(1000.0 / fps)
    }

    pub fn with_interval(target_interval_ms: f64) -> Self {
        Self {
            target_interval_ms,
            start_ms: 0.0,
            last_tick_ms: 0.0,
            tick_count: 0,
            observed_fps: 0.0,
        }
    }

    /// Anchor the schedule at `now_ms`. The first tick fires once more than
    /// one interval has passed.
    pub fn start(&mut self, now_ms: f64) {
        self.start_ms = now_ms;
        self.last_tick_ms = now_ms;
        self.tick_count = 0;
        self.observed_fps = 0.0;
    }

    /// Decide whether a tick is due at `now_ms`, and if so advance the
    /// schedule as if it fired.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let elapsed = now_ms - self.last_tick_ms;
        if elapsed <= self.target_interval_ms {
            return false;
        }

        self.last_tick_ms = now_ms - elapsed % self.target_interval_ms;
        self.tick_count += 1;

        let since_start = now_ms - self.start_ms;
        if since_start > 0.0 {
            let fps = 1000.0 / (since_start / self.tick_count as f64);
            self.observed_fps = (fps * 100.0).round() / 100.0;
        }

        log::trace!(
            "TICK #{} at {now_ms} (elapsed {elapsed}, {} fps)",
            self.tick_count,
            self.observed_fps
        );
        true
    }

    /// Poll at `now_ms` and, when a tick is due, call `draw` then `update`
    /// on `drawable`. Returns whether a tick fired.
    pub fn run_frame<B, D>(
        &mut self,
        now_ms: f64,
        drawable: &mut D,
        surface: &mut RenderSurface<B>,
    ) -> bool
    where
        B: Backend,
        D: Drawable<B> + ?Sized,
    {
        if !self.poll(now_ms) {
            return false;
        }
        drawable.draw(surface);
        drawable.update();
        true
    }

    pub fn target_interval_ms(&self) -> f64 {
        self.target_interval_ms
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Average ticks per second since `start`, rounded to two decimals.
    /// Zero before the first tick.
    pub fn observed_fps(&self) -> f64 {
        self.observed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_full_interval() {
        let mut s = FrameScheduler::with_interval(33.0);
        s.start(0.0);

        let fired: Vec<bool> = [0.0, 10.0, 40.0, 80.0].iter().map(|&t| s.poll(t)).collect();
        assert_eq!(fired, vec![false, false, true, true]);
        assert_eq!(s.tick_count(), 2);
    }

    #[test]
    fn last_tick_is_phase_corrected() {
        let mut s = FrameScheduler::with_interval(33.0);
        s.start(0.0);
        s.poll(10.0);
        assert!(s.poll(40.0));
        assert_eq!(s.last_tick_ms(), 33.0);
        assert!(s.poll(80.0));
        assert_eq!(s.last_tick_ms(), 66.0);
    }

    #[test]
    fn exactly_one_interval_does_not_fire() {
        let mut s = FrameScheduler::with_interval(33.0);
        s.start(100.0);
        assert!(!s.poll(133.0));
        assert!(s.poll(133.5));
    }

    #[test]
    fn stall_fires_single_tick() {
        let mut s = FrameScheduler::with_interval(10.0);
        s.start(0.0);
        assert!(s.poll(1005.0));
        assert_eq!(s.tick_count(), 1);
        assert_eq!(s.last_tick_ms(), 1000.0);
        assert!(!s.poll(1009.0));
        assert!(s.poll(1010.5));
    }

    #[test]
    fn observed_fps_is_rounded_average() {
        let mut s = FrameScheduler::with_interval(10.0);
        s.start(0.0);
        s.poll(11.0);
        s.poll(22.0);
        s.poll(33.0);
        // 3 ticks in 33 ms
        assert_eq!(s.observed_fps(), 90.91);
    }

    #[test]
    fn fps_constructor_sets_interval() {
        let s = FrameScheduler::new(30.0);
        assert!((s.target_interval_ms() - 1000.0 / 30.0).abs() < 1e-12);
        assert_eq!(s.observed_fps(), 0.0);
    }
}
