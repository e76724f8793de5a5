use core::fmt;

use crate::level::{ButtonId, Level};

/// Width limit of the per-button debounce counter.
pub const DEBOUNCE_TICKS_MAX: u8 = 7;

/// Repeat counter saturates here instead of wrapping.
pub const PRESS_REPEAT_MAX: u8 = 15;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Profile {
    /// Fixed thresholds; only click, short/long press and hold events.
    Lite,
    /// Per-button thresholds and the full event set.
    Pro,
}

/// Timing thresholds of one button.
///
/// `debounce_ticks` counts driver cycles; the two press thresholds are in
/// the same unit as the `cycle_ms` passed to [`crate::Registry::tick`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Thresholds {
    debounce_ticks: u8,
    short_press_ms: u16,
    long_press_ms: u16,
}

include!(concat!(env!("OUT_DIR"), "/button_config.rs"));

impl Thresholds {
    pub fn new(
        debounce_ticks: u8,
        short_press_ms: u16,
        long_press_ms: u16,
    ) -> Result<Self, ConfigError> {
        if debounce_ticks == 0 || debounce_ticks > DEBOUNCE_TICKS_MAX {
            return Err(ConfigError::DebounceTicksOutOfRange(debounce_ticks));
        }
        if short_press_ms == 0 {
            return Err(ConfigError::ShortPressZero);
        }
        if long_press_ms <= short_press_ms {
            return Err(ConfigError::LongPressNotAfterShort {
                short_press_ms,
                long_press_ms,
            });
        }
        if u16::from(debounce_ticks) * 2 > short_press_ms {
            log::warn!(
                "button: debounce_ticks={} exceeds half of short_press_ms={}; double clicks will be unreliable",
                debounce_ticks,
                short_press_ms
            );
        }
        Ok(Self {
            debounce_ticks,
            short_press_ms,
            long_press_ms,
        })
    }

    pub const fn debounce_ticks(&self) -> u8 {
        self.debounce_ticks
    }

    pub const fn short_press_ms(&self) -> u16 {
        self.short_press_ms
    }

    pub const fn long_press_ms(&self) -> u16 {
        self.long_press_ms
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        DEFAULT_PRO_THRESHOLDS
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ButtonConfig {
    pub profile: Profile,
    /// Raw level that means "pressed".
    pub active_level: Level,
    pub button_id: ButtonId,
    pub thresholds: Thresholds,
}

impl ButtonConfig {
    pub const fn lite(active_level: Level, button_id: ButtonId) -> Self {
        Self {
            profile: Profile::Lite,
            active_level,
            button_id,
            thresholds: LITE_THRESHOLDS,
        }
    }

    pub const fn pro(active_level: Level, button_id: ButtonId, thresholds: Thresholds) -> Self {
        Self {
            profile: Profile::Pro,
            active_level,
            button_id,
            thresholds,
        }
    }

    /// Thresholds the state machine actually runs with. Lite buttons ignore
    /// whatever was stored and always use [`LITE_THRESHOLDS`].
    pub const fn effective_thresholds(&self) -> Thresholds {
        match self.profile {
            Profile::Lite => LITE_THRESHOLDS,
            Profile::Pro => self.thresholds,
        }
    }

    pub const fn inactive_level(&self) -> Level {
        self.active_level.toggled()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    DebounceTicksOutOfRange(u8),
    ShortPressZero,
    LongPressNotAfterShort {
        short_press_ms: u16,
        long_press_ms: u16,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DebounceTicksOutOfRange(ticks) => write!(
                f,
                "debounce_ticks={ticks} outside 1..={DEBOUNCE_TICKS_MAX}"
            ),
            Self::ShortPressZero => f.write_str("short_press_ms must be > 0"),
            Self::LongPressNotAfterShort {
                short_press_ms,
                long_press_ms,
            } => write!(
                f,
                "long_press_ms={long_press_ms} must be > short_press_ms={short_press_ms}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
