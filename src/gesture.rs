use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use crate::{
    config::{Profile, Thresholds, PRESS_REPEAT_MAX},
    event::{Emission, EventBuffer, PressEvent},
    snapshot::GestureStateId,
};

/// Debounced input for one tick of one button.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GestureInput {
    pub(crate) pressed: bool,
    pub(crate) cycle_ms: u16,
    pub(crate) thresholds: Thresholds,
    pub(crate) profile: Profile,
}

#[derive(Default)]
struct DispatchContext {
    events: EventBuffer,
}

pub(crate) struct GestureMachine {
    machine: statig::blocking::StateMachine<GestureHsm>,
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureMachine {
    pub(crate) fn new() -> Self {
        Self {
            machine: GestureHsm::new().state_machine(),
        }
    }

    pub(crate) fn step(&mut self, input: GestureInput) -> EventBuffer {
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&input, &mut context);
        context.events
    }

    pub(crate) fn state(&self) -> GestureStateId {
        self.machine.inner().state_id
    }

    pub(crate) fn elapsed_ms(&self) -> u32 {
        self.machine.inner().elapsed_ms
    }

    pub(crate) fn repeat_count(&self) -> u8 {
        self.machine.inner().repeat
    }

    pub(crate) fn last_event(&self) -> Option<PressEvent> {
        self.machine.inner().last_event
    }
}

struct GestureHsm {
    elapsed_ms: u32,
    repeat: u8,
    last_event: Option<PressEvent>,
    state_id: GestureStateId,
}

impl GestureHsm {
    fn new() -> Self {
        Self {
            elapsed_ms: 0,
            repeat: 0,
            last_event: None,
            state_id: GestureStateId::Idle,
        }
    }

    fn advance(&mut self, cycle_ms: u16) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(u32::from(cycle_ms));
    }

    fn emit(&mut self, context: &mut DispatchContext, profile: Profile, event: PressEvent) {
        if profile == Profile::Lite && event.is_pro_only() {
            return;
        }
        self.last_event = Some(event);
        let emission = Emission {
            event,
            repeat_count: self.repeat,
            elapsed_ms: self.elapsed_ms,
            state: self.state_id,
        };
        if context.events.push(emission).is_err() {
            log::warn!("gesture: dropped {:?}, tick buffer full", event);
        }
    }

    fn bump_repeat(&mut self) {
        if self.repeat < PRESS_REPEAT_MAX {
            self.repeat += 1;
        }
    }

    fn enter(&mut self, next: GestureStateId) -> Outcome<State> {
        log::trace!(
            "gesture: {:?} -> {:?} elapsed_ms={} repeat={}",
            self.state_id,
            next,
            self.elapsed_ms,
            self.repeat
        );
        self.state_id = next;
        match next {
            GestureStateId::Idle => Transition(State::idle()),
            GestureStateId::Pressed => Transition(State::pressed()),
            GestureStateId::ReleasedWaitingRepeat => Transition(State::released_waiting_repeat()),
            GestureStateId::PressedRepeat => Transition(State::pressed_repeat()),
            GestureStateId::LongHeld => Transition(State::long_held()),
        }
    }
}

#[state_machine(initial = "State::idle()")]
impl GestureHsm {
    #[state]
    fn idle(&mut self, context: &mut DispatchContext, event: &GestureInput) -> Outcome<State> {
        if event.pressed {
            self.elapsed_ms = 0;
            self.repeat = 1;
            self.emit(context, event.profile, PressEvent::PressDown);
            return self.enter(GestureStateId::Pressed);
        }
        self.last_event = None;
        Handled
    }

    #[state]
    fn pressed(&mut self, context: &mut DispatchContext, event: &GestureInput) -> Outcome<State> {
        self.advance(event.cycle_ms);

        if !event.pressed {
            self.emit(context, event.profile, PressEvent::PressUp);
            self.elapsed_ms = 0;
            return self.enter(GestureStateId::ReleasedWaitingRepeat);
        }

        if self.elapsed_ms > u32::from(event.thresholds.long_press_ms()) {
            self.emit(context, event.profile, PressEvent::LongPressStart);
            return self.enter(GestureStateId::LongHeld);
        }

        // Exact match: a tick period that steps over the threshold never fires.
        if self.elapsed_ms == u32::from(event.thresholds.short_press_ms()) {
            self.emit(context, event.profile, PressEvent::ShortPressStart);
        }
        Handled
    }

    #[state]
    fn released_waiting_repeat(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureInput,
    ) -> Outcome<State> {
        self.advance(event.cycle_ms);

        if event.pressed {
            self.emit(context, event.profile, PressEvent::PressDown);
            self.bump_repeat();
            self.emit(context, event.profile, PressEvent::PressRepeat);
            self.elapsed_ms = 0;
            return self.enter(GestureStateId::PressedRepeat);
        }

        if self.elapsed_ms > u32::from(event.thresholds.short_press_ms()) {
            match self.repeat {
                1 => self.emit(context, event.profile, PressEvent::SingleClick),
                2 => self.emit(context, event.profile, PressEvent::DoubleClick),
                _ => {}
            }
            return self.enter(GestureStateId::Idle);
        }
        Handled
    }

    #[state]
    fn pressed_repeat(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureInput,
    ) -> Outcome<State> {
        self.advance(event.cycle_ms);
        let short_ms = u32::from(event.thresholds.short_press_ms());

        if !event.pressed {
            self.emit(context, event.profile, PressEvent::PressUp);
            if self.elapsed_ms < short_ms {
                self.elapsed_ms = 0;
                return self.enter(GestureStateId::ReleasedWaitingRepeat);
            }
            return self.enter(GestureStateId::Idle);
        }

        if self.elapsed_ms > short_ms {
            return self.enter(GestureStateId::Pressed);
        }
        Handled
    }

    #[state]
    fn long_held(&mut self, context: &mut DispatchContext, event: &GestureInput) -> Outcome<State> {
        self.advance(event.cycle_ms);

        if event.pressed {
            self.emit(context, event.profile, PressEvent::LongPressHold);
            return Handled;
        }

        self.emit(context, event.profile, PressEvent::PressUp);
        self.emit(context, event.profile, PressEvent::LongClick);
        self.enter(GestureStateId::Idle)
    }
}
