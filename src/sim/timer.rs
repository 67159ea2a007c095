//! Solve stopwatch
//!
//! Time is always passed in as milliseconds from a monotonic clock
//! (`performance.now()` in the browser), so the stopwatch stays deterministic.

/// Display text when nothing has been timed
pub const ZERO_DISPLAY: &str = "0.000s";

/// Format elapsed milliseconds as seconds with three decimals
pub fn format_elapsed(elapsed_ms: f64) -> String {
    format!("{:.3}s", elapsed_ms.max(0.0) / 1000.0)
}

#[derive(Debug, Clone)]
pub struct Stopwatch {
    /// Epoch of the running measurement; `None` when stopped
    epoch_ms: Option<f64>,
    /// Last elapsed value pushed to the display
    last_elapsed_ms: f64,
    display: String,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            epoch_ms: None,
            last_elapsed_ms: 0.0,
            display: ZERO_DISPLAY.to_string(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.epoch_ms.is_some()
    }

    /// Begin timing from `now_ms`; restarts if already running
    pub fn start(&mut self, now_ms: f64) {
        self.epoch_ms = Some(now_ms);
        self.last_elapsed_ms = 0.0;
        self.display = ZERO_DISPLAY.to_string();
    }

    /// Periodic refresh. Returns true when the display text changed.
    ///
    /// A tick arriving after `stop` is a no-op.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(epoch) = self.epoch_ms else {
            return false;
        };
        self.last_elapsed_ms = (now_ms - epoch).max(0.0);
        let text = format_elapsed(self.last_elapsed_ms);
        if text == self.display {
            return false;
        }
        self.display = text;
        true
    }

    /// Freeze the display at the final elapsed time and return it (ms)
    pub fn stop(&mut self, now_ms: f64) -> Option<f64> {
        if !self.is_running() {
            return None;
        }
        self.tick(now_ms);
        self.epoch_ms = None;
        Some(self.last_elapsed_ms)
    }

    /// Stop without recording and show the canonical zero
    pub fn clear(&mut self) {
        self.epoch_ms = None;
        self.last_elapsed_ms = 0.0;
        self.display = ZERO_DISPLAY.to_string();
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn last_elapsed_ms(&self) -> f64 {
        self.last_elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0.0), "0.000s");
        assert_eq!(format_elapsed(1234.0), "1.234s");
        assert_eq!(format_elapsed(61_000.0), "61.000s");
        assert_eq!(format_elapsed(-5.0), "0.000s");
    }

    #[test]
    fn test_tick_updates_display() {
        let mut sw = Stopwatch::new();
        sw.start(1000.0);
        assert!(sw.tick(1010.0));
        assert_eq!(sw.display(), "0.010s");
        assert!(!sw.tick(1010.0));
    }

    #[test]
    fn test_stop_freezes_display() {
        let mut sw = Stopwatch::new();
        sw.start(0.0);
        sw.tick(500.0);
        assert_eq!(sw.stop(2500.0), Some(2500.0));
        assert_eq!(sw.display(), "2.500s");
        assert!(!sw.is_running());

        // Late interval tick must not move anything
        assert!(!sw.tick(9000.0));
        assert_eq!(sw.display(), "2.500s");
        assert_eq!(sw.stop(9000.0), None);
    }

    #[test]
    fn test_clear_resets_to_zero() {
        let mut sw = Stopwatch::new();
        sw.start(0.0);
        sw.stop(750.0);
        sw.clear();
        assert_eq!(sw.display(), ZERO_DISPLAY);
        assert_eq!(sw.last_elapsed_ms(), 0.0);
    }

    #[test]
    fn test_restart_resets_display() {
        let mut sw = Stopwatch::new();
        sw.start(0.0);
        sw.stop(3000.0);
        sw.start(5000.0);
        assert_eq!(sw.display(), ZERO_DISPLAY);
        sw.tick(5001.0);
        assert_eq!(sw.display(), "0.001s");
    }
}
