//! Words-per-minute estimate
//!
//! Keystrokes are counted into a ring of sample periods covering a fixed
//! window; the estimate is the window total scaled to a minute.

use crate::config::WpmConfig;

/// Characters that count as one word
pub const CHARS_PER_WORD: u32 = 5;

/// Upper bound on sample periods per window
pub const MAX_SAMPLE_PERIODS: usize = 64;

/// Sliding-window typing speed estimator
#[derive(Debug, Clone)]
pub struct WpmEstimator {
    buckets: [u8; MAX_SAMPLE_PERIODS],
    periods: usize,
    current: usize,
    sample_seconds: u16,
    wpm: u16,
}

impl WpmEstimator {
    /// Create an estimator for the configured window
    pub fn new(config: &WpmConfig) -> Self {
        Self {
            buckets: [0; MAX_SAMPLE_PERIODS],
            periods: (config.sample_periods as usize).clamp(1, MAX_SAMPLE_PERIODS),
            current: 0,
            sample_seconds: config.sample_seconds.max(1),
            wpm: 0,
        }
    }

    /// Length of one sample period in milliseconds
    pub fn period_ms(&self) -> u32 {
        (u32::from(self.sample_seconds) * 1000 / self.periods as u32).max(1)
    }

    /// Count one keystroke in the current period
    pub fn record_keystroke(&mut self) {
        self.record_keystrokes(1);
    }

    /// Count several keystrokes in the current period
    pub fn record_keystrokes(&mut self, count: u32) {
        let count = count.min(u32::from(u8::MAX)) as u8;
        self.buckets[self.current] = self.buckets[self.current].saturating_add(count);
    }

    /// Close the current sample period and recompute the estimate
    ///
    /// Returns the new estimate.
    pub fn advance(&mut self) -> u16 {
        let total: u32 = self.buckets[..self.periods]
            .iter()
            .map(|&b| u32::from(b))
            .sum();

        let wpm = total * 60 / (u32::from(self.sample_seconds) * CHARS_PER_WORD);
        self.wpm = wpm.min(u32::from(u16::MAX)) as u16;

        self.current = (self.current + 1) % self.periods;
        self.buckets[self.current] = 0;

        self.wpm
    }

    /// Most recent estimate
    pub fn wpm(&self) -> u16 {
        self.wpm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WpmConfig {
        WpmConfig {
            scale_max: 150,
            sample_seconds: 4,
            sample_periods: 32,
        }
    }

    #[test]
    fn test_period_length() {
        assert_eq!(WpmEstimator::new(&config()).period_ms(), 125);
    }

    #[test]
    fn test_steady_typing() {
        let mut wpm = WpmEstimator::new(&config());

        // 25 keystrokes in a 4 s window = 5 words in 4 s = 75 WPM
        for _ in 0..25 {
            wpm.record_keystroke();
        }
        assert_eq!(wpm.advance(), 75);
    }

    #[test]
    fn test_decays_to_zero() {
        let mut wpm = WpmEstimator::new(&config());
        for _ in 0..10 {
            wpm.record_keystroke();
        }
        assert!(wpm.advance() > 0);

        for _ in 0..32 {
            wpm.advance();
        }
        assert_eq!(wpm.wpm(), 0);
    }

    #[test]
    fn test_batched_keystrokes() {
        let mut wpm = WpmEstimator::new(&config());
        wpm.record_keystrokes(20);
        wpm.record_keystroke();
        wpm.advance();
        wpm.record_keystrokes(4);
        assert_eq!(wpm.advance(), 75);
    }

    #[test]
    fn test_degenerate_config_clamped() {
        let wpm = WpmEstimator::new(&WpmConfig {
            scale_max: 150,
            sample_seconds: 0,
            sample_periods: 0,
        });
        assert_eq!(wpm.period_ms(), 1000);
    }
}
