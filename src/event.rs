use crate::snapshot::GestureStateId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PressEvent {
    /// Every press, including repeat presses.
    PressDown = 0,
    /// Every release.
    PressUp = 1,
    /// A press that continues a click sequence; see the repeat count.
    PressRepeat = 2,
    SingleClick = 3,
    DoubleClick = 4,
    /// Release after the long-press threshold was crossed.
    LongClick = 5,
    /// Fires once when the hold time equals the short threshold exactly.
    ShortPressStart = 6,
    /// Fires once when the hold time exceeds the long threshold.
    LongPressStart = 7,
    /// Fires every tick while held past the long threshold.
    LongPressHold = 8,
}

impl PressEvent {
    pub const COUNT: usize = 9;

    pub const ALL: [PressEvent; Self::COUNT] = [
        Self::PressDown,
        Self::PressUp,
        Self::PressRepeat,
        Self::SingleClick,
        Self::DoubleClick,
        Self::LongClick,
        Self::ShortPressStart,
        Self::LongPressStart,
        Self::LongPressHold,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Events the lite profile never produces.
    pub const fn is_pro_only(self) -> bool {
        matches!(
            self,
            Self::PressDown | Self::PressUp | Self::PressRepeat | Self::DoubleClick
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::PressDown => "PressDown",
            Self::PressUp => "PressUp",
            Self::PressRepeat => "PressRepeat",
            Self::SingleClick => "SingleClick",
            Self::DoubleClick => "DoubleClick",
            Self::LongClick => "LongClick",
            Self::ShortPressStart => "ShortPressStart",
            Self::LongPressStart => "LongPressStart",
            Self::LongPressHold => "LongPressHold",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }
}

/// One event together with the machine fields as they stood when it fired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Emission {
    pub(crate) event: PressEvent,
    pub(crate) repeat_count: u8,
    pub(crate) elapsed_ms: u32,
    pub(crate) state: GestureStateId,
}

pub(crate) const MAX_EMISSIONS_PER_TICK: usize = 4;

/// Ordered emissions of a single tick of a single button.
pub(crate) type EventBuffer = heapless::Vec<Emission, MAX_EMISSIONS_PER_TICK>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, event) in PressEvent::ALL.into_iter().enumerate() {
            assert_eq!(event.index(), i);
            assert_eq!(PressEvent::from_name(event.name()), Some(event));
        }
        assert_eq!(PressEvent::from_name("NonePress"), None);
    }
}
