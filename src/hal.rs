//! Level readers backed by `embedded-hal` input pins.
//!
//! Pin read errors report `Level::Low`.

use core::cell::RefCell;

use embedded_hal::digital::InputPin;

use crate::level::{ButtonId, Level, LevelReader};

/// Reader for a single pin; the button id is ignored.
pub struct PinReader<P> {
    pin: RefCell<P>,
}

impl<P: InputPin> PinReader<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
        }
    }

    pub fn into_inner(self) -> P {
        self.pin.into_inner()
    }
}

impl<P: InputPin> LevelReader for PinReader<P> {
    fn read_level(&self, _button_id: ButtonId) -> Level {
        let Ok(mut pin) = self.pin.try_borrow_mut() else {
            return Level::Low;
        };
        Level::from(pin.is_high().unwrap_or(false))
    }
}

/// Reader for `N` pins indexed by button id. Ids past the end read low.
pub struct PinBank<P, const N: usize> {
    pins: RefCell<[P; N]>,
}

impl<P: InputPin, const N: usize> PinBank<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        Self {
            pins: RefCell::new(pins),
        }
    }

    pub fn into_inner(self) -> [P; N] {
        self.pins.into_inner()
    }
}

impl<P: InputPin, const N: usize> LevelReader for PinBank<P, N> {
    fn read_level(&self, button_id: ButtonId) -> Level {
        let Ok(mut pins) = self.pins.try_borrow_mut() else {
            return Level::Low;
        };
        pins.get_mut(usize::from(button_id))
            .map_or(Level::Low, |pin| Level::from(pin.is_high().unwrap_or(false)))
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::digital::{ErrorKind, ErrorType};

    use super::*;

    struct FakePin {
        high: bool,
        fail: bool,
    }

    impl ErrorType for FakePin {
        type Error = ErrorKind;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn single_pin_reports_its_level() {
        let reader = PinReader::new(FakePin {
            high: true,
            fail: false,
        });
        assert_eq!(reader.read_level(0), Level::High);
        assert_eq!(reader.read_level(42), Level::High);
    }

    #[test]
    fn failing_pin_reads_low() {
        let reader = PinReader::new(FakePin {
            high: true,
            fail: true,
        });
        assert_eq!(reader.read_level(0), Level::Low);
    }

    #[test]
    fn bank_indexes_by_button_id() {
        let bank = PinBank::new([
            FakePin {
                high: false,
                fail: false,
            },
            FakePin {
                high: true,
                fail: false,
            },
        ]);
        assert_eq!(bank.read_level(0), Level::Low);
        assert_eq!(bank.read_level(1), Level::High);
        assert_eq!(bank.read_level(2), Level::Low);
    }
}
