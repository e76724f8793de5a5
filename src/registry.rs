use core::{cell::RefCell, fmt, ptr};

use crate::button::Button;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    AlreadyRegistered,
    Full,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRegistered => f.write_str("button is already registered"),
            Self::Full => f.write_str("registry is full"),
        }
    }
}

impl core::error::Error for RegistryError {}

/// Set of buttons driven by [`Registry::tick`].
///
/// Buttons stay owned by the caller; the registry only borrows them, so
/// unregistering never resets or drops a button. Up to `N` buttons can be
/// registered at once.
pub struct Registry<'r, 'a, const N: usize> {
    buttons: heapless::Vec<&'r RefCell<Button<'a>>, N>,
}

impl<'r, 'a, const N: usize> Default for Registry<'r, 'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, 'a, const N: usize> Registry<'r, 'a, N> {
    pub const fn new() -> Self {
        Self {
            buttons: heapless::Vec::new(),
        }
    }

    pub fn register(&mut self, button: &'r RefCell<Button<'a>>) -> Result<(), RegistryError> {
        if self.contains(button) {
            log::warn!("registry: duplicate register rejected");
            return Err(RegistryError::AlreadyRegistered);
        }
        self.buttons.push(button).map_err(|_| {
            log::warn!("registry: full capacity={}", N);
            RegistryError::Full
        })?;
        log::debug!("registry: registered count={}", self.buttons.len());
        Ok(())
    }

    /// Removes `button` if present. Returns whether anything was removed.
    pub fn unregister(&mut self, button: &RefCell<Button<'a>>) -> bool {
        let Some(index) = self.position(button) else {
            return false;
        };
        self.buttons.remove(index);
        log::debug!("registry: unregistered count={}", self.buttons.len());
        true
    }

    pub fn contains(&self, button: &RefCell<Button<'a>>) -> bool {
        self.position(button).is_some()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Advances every registered button by one period of `cycle_ms`.
    ///
    /// Must be called from a single context at a fixed period. A button that
    /// is borrowed elsewhere at the time of the call skips this tick.
    pub fn tick(&mut self, cycle_ms: u16) {
        for cell in &self.buttons {
            let Ok(mut button) = cell.try_borrow_mut() else {
                log::warn!("registry: button busy; tick skipped");
                continue;
            };
            button.tick(cycle_ms);
        }
    }

    fn position(&self, button: &RefCell<Button<'a>>) -> Option<usize> {
        self.buttons
            .iter()
            .position(|registered| ptr::eq(*registered, button))
    }
}
