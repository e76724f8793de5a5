//! Consecutive-mismatch debounce.
//!
//! The stable level flips only after `debounce_ticks` samples in a row
//! disagree with it; a single agreeing sample restarts the run.

use crate::level::Level;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DebounceFilter {
    stable: Level,
    count: u8,
}

impl DebounceFilter {
    pub const fn new(initial: Level) -> Self {
        Self {
            stable: initial,
            count: 0,
        }
    }

    pub fn update(&mut self, raw: Level, debounce_ticks: u8) -> Level {
        if raw == self.stable {
            self.count = 0;
            return self.stable;
        }

        self.count = self.count.saturating_add(1);
        if self.count >= debounce_ticks {
            self.stable = raw;
            self.count = 0;
        }
        self.stable
    }

    pub const fn stable(&self) -> Level {
        self.stable
    }

    pub const fn count(&self) -> u8 {
        self.count
    }

    pub fn reset(&mut self, level: Level) {
        self.stable = level;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEBOUNCE_TICKS_MAX;

    #[test]
    fn flips_after_threshold_consecutive_mismatches() {
        let mut filter = DebounceFilter::new(Level::High);
        assert_eq!(filter.update(Level::Low, 3), Level::High);
        assert_eq!(filter.update(Level::Low, 3), Level::High);
        assert_eq!(filter.count(), 2);
        assert_eq!(filter.update(Level::Low, 3), Level::Low);
        assert_eq!(filter.count(), 0);
    }

    #[test]
    fn single_agreeing_sample_aborts_the_run() {
        let mut filter = DebounceFilter::new(Level::High);
        filter.update(Level::Low, 3);
        filter.update(Level::Low, 3);
        filter.update(Level::High, 3);
        assert_eq!(filter.count(), 0);
        filter.update(Level::Low, 3);
        filter.update(Level::Low, 3);
        assert_eq!(filter.stable(), Level::High);
    }

    #[test]
    fn chatter_shorter_than_threshold_never_changes_stable_level() {
        let mut filter = DebounceFilter::new(Level::Low);
        // Longest run of mismatches is threshold - 1, also across repeats.
        let pattern = [1u8, 1, 0, 1, 0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 0];
        for _ in 0..20 {
            for raw in pattern {
                assert_eq!(filter.update(Level::from_raw(raw), 3), Level::Low);
            }
        }
    }

    #[test]
    fn random_chatter_below_threshold_is_rejected() {
        let mut seed: u32 = 0x2545_f491;
        let mut next_bit = || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed & 1 == 1
        };

        for ticks in 2..=DEBOUNCE_TICKS_MAX {
            let mut filter = DebounceFilter::new(Level::Low);
            let mut run = 0u8;
            for _ in 0..2_000 {
                let raw = if run + 1 < ticks && next_bit() {
                    run += 1;
                    Level::High
                } else {
                    run = 0;
                    Level::Low
                };
                assert_eq!(filter.update(raw, ticks), Level::Low, "ticks={ticks}");
                assert!(filter.count() < ticks);
            }
        }
    }

    #[test]
    fn single_tick_threshold_follows_input_immediately() {
        let mut filter = DebounceFilter::new(Level::Low);
        assert_eq!(filter.update(Level::High, 1), Level::High);
        assert_eq!(filter.update(Level::Low, 1), Level::Low);
    }

    #[test]
    fn reset_overrides_stable_level_and_count() {
        let mut filter = DebounceFilter::new(Level::Low);
        filter.update(Level::High, 5);
        filter.reset(Level::High);
        assert_eq!(filter.stable(), Level::High);
        assert_eq!(filter.count(), 0);
    }
}
