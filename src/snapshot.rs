use crate::{
    event::PressEvent,
    level::{ButtonId, Level},
};

/// Gesture state machine states. The numeric codes are stable and skip 4.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum GestureStateId {
    #[default]
    Idle = 0,
    Pressed = 1,
    ReleasedWaitingRepeat = 2,
    PressedRepeat = 3,
    LongHeld = 5,
}

impl GestureStateId {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Read-only view of a button, handed to event callbacks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ButtonSnapshot {
    pub button_id: ButtonId,
    pub state: GestureStateId,
    pub stable_level: Level,
    pub debounce_count: u8,
    pub elapsed_ms: u32,
    pub repeat_count: u8,
    pub last_event: Option<PressEvent>,
}
