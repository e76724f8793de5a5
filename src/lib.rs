//! Periodic-poll debounce and gesture recognition for momentary buttons.
//!
//! Buttons are caller-owned [`Button`] values wrapped in a `RefCell`; a
//! [`Registry`] borrows them and drives every registered button once per
//! [`Registry::tick`]. Each tick samples the raw level through a
//! [`LevelReader`], debounces it, advances the gesture state machine and
//! dispatches the resulting [`PressEvent`]s to the callbacks attached to
//! that button.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod config;
pub mod debounce;
pub mod event;
mod gesture;
#[cfg(feature = "hal")]
pub mod hal;
pub mod level;
pub mod registry;
pub mod snapshot;

pub use button::{Button, Callback};
pub use config::{
    ButtonConfig, ConfigError, Profile, Thresholds, DEBOUNCE_TICKS_MAX, DEFAULT_PRO_THRESHOLDS,
    LITE_THRESHOLDS, PRESS_REPEAT_MAX,
};
pub use debounce::DebounceFilter;
pub use event::PressEvent;
pub use level::{ButtonId, Level, LevelReader};
pub use registry::{Registry, RegistryError};
pub use snapshot::{ButtonSnapshot, GestureStateId};
