use crate::{
    config::ButtonConfig,
    debounce::DebounceFilter,
    event::{EventBuffer, PressEvent},
    gesture::{GestureInput, GestureMachine},
    level::{ButtonId, Level, LevelReader},
    snapshot::{ButtonSnapshot, GestureStateId},
};

/// Event callback. Receives the button as it stood when the event fired.
pub type Callback<'a> = &'a dyn Fn(&ButtonSnapshot);

/// One physical button: debounce filter, gesture state machine and the
/// callbacks bound to its events.
pub struct Button<'a> {
    config: ButtonConfig,
    level_reader: &'a dyn LevelReader,
    debounce: DebounceFilter,
    machine: GestureMachine,
    callbacks: [Option<Callback<'a>>; PressEvent::COUNT],
}

impl<'a> Button<'a> {
    /// Builds a released button with no progress and no callbacks.
    pub fn new(level_reader: &'a dyn LevelReader, config: ButtonConfig) -> Self {
        Self {
            config,
            level_reader,
            debounce: DebounceFilter::new(config.inactive_level()),
            machine: GestureMachine::new(),
            callbacks: [None; PressEvent::COUNT],
        }
    }

    /// Rebinds the reader and configuration while keeping the state machine
    /// progress, repeat count and callbacks. The debounce filter is
    /// re-seeded only when the active level changes.
    pub fn reconfigure(&mut self, level_reader: &'a dyn LevelReader, config: ButtonConfig) {
        if config.active_level != self.config.active_level {
            self.debounce.reset(config.inactive_level());
        }
        self.level_reader = level_reader;
        self.config = config;
        log::debug!(
            "button[{}]: reconfigured profile={:?} active={:?}",
            config.button_id,
            config.profile,
            config.active_level
        );
    }

    pub fn attach(&mut self, event: PressEvent, callback: Callback<'a>) {
        self.callbacks[event.index()] = Some(callback);
    }

    pub fn detach(&mut self, event: PressEvent) {
        self.callbacks[event.index()] = None;
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn id(&self) -> ButtonId {
        self.config.button_id
    }

    /// Last event produced, whether or not a callback was bound to it.
    /// Cleared on every idle tick.
    pub fn last_event(&self) -> Option<PressEvent> {
        self.machine.last_event()
    }

    pub fn repeat_count(&self) -> u8 {
        self.machine.repeat_count()
    }

    pub fn state(&self) -> GestureStateId {
        self.machine.state()
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.machine.elapsed_ms()
    }

    pub fn stable_level(&self) -> Level {
        self.debounce.stable()
    }

    pub fn is_pressed(&self) -> bool {
        self.debounce.stable() == self.config.active_level
    }

    pub fn snapshot(&self) -> ButtonSnapshot {
        ButtonSnapshot {
            button_id: self.config.button_id,
            state: self.machine.state(),
            stable_level: self.debounce.stable(),
            debounce_count: self.debounce.count(),
            elapsed_ms: self.machine.elapsed_ms(),
            repeat_count: self.machine.repeat_count(),
            last_event: self.machine.last_event(),
        }
    }

    pub(crate) fn step(&mut self, cycle_ms: u16) -> EventBuffer {
        let raw = self.level_reader.read_level(self.config.button_id);
        let thresholds = self.config.effective_thresholds();
        let stable = self.debounce.update(raw, thresholds.debounce_ticks());
        self.machine.step(GestureInput {
            pressed: stable == self.config.active_level,
            cycle_ms,
            thresholds,
            profile: self.config.profile,
        })
    }

    pub(crate) fn dispatch(&self, events: &EventBuffer) {
        for emission in events.iter() {
            let Some(callback) = self.callbacks[emission.event.index()] else {
                continue;
            };
            let snapshot = ButtonSnapshot {
                button_id: self.config.button_id,
                state: emission.state,
                stable_level: self.debounce.stable(),
                debounce_count: self.debounce.count(),
                elapsed_ms: emission.elapsed_ms,
                repeat_count: emission.repeat_count,
                last_event: Some(emission.event),
            };
            callback(&snapshot);
        }
    }

    pub(crate) fn tick(&mut self, cycle_ms: u16) -> EventBuffer {
        let events = self.step(cycle_ms);
        self.dispatch(&events);
        events
    }
}
