#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Level {
    #[default]
    Low = 0,
    High = 1,
}

impl Level {
    /// Any non-zero raw sample reads as `High`.
    pub const fn from_raw(raw: u8) -> Self {
        if raw == 0 {
            Self::Low
        } else {
            Self::High
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

/// Identifier handed to the level reader so one reader can serve many buttons.
pub type ButtonId = u8;

/// Samples the raw level of a button.
///
/// Called synchronously from inside [`crate::Registry::tick`]; it must not
/// block and must not have side effects beyond reading the input.
pub trait LevelReader {
    fn read_level(&self, button_id: ButtonId) -> Level;
}

impl<F> LevelReader for F
where
    F: Fn(ButtonId) -> Level,
{
    fn read_level(&self, button_id: ButtonId) -> Level {
        self(button_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_samples_map_nonzero_to_high() {
        assert_eq!(Level::from_raw(0), Level::Low);
        assert_eq!(Level::from_raw(1), Level::High);
        assert_eq!(Level::from_raw(0xff), Level::High);
    }

    #[test]
    fn toggled_flips_level() {
        assert_eq!(Level::Low.toggled(), Level::High);
        assert_eq!(Level::High.toggled(), Level::Low);
    }

    #[test]
    fn closures_multiplex_by_id() {
        let reader = |id: ButtonId| Level::from(id % 2 == 1);
        assert_eq!(reader.read_level(0), Level::Low);
        assert_eq!(reader.read_level(3), Level::High);
    }
}
