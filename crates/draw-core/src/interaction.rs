//! Play-button lockout: `Idle -> Drawing -> Cooldown -> Idle`, forever.
//!
//! [`transition`] is pure; [`InteractionMachine::apply`] is the only place
//! the current state changes.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Trigger accepts one activation.
    #[default]
    Idle,
    /// Activation accepted; the draw is being set up.
    Drawing,
    /// Trigger locked until the timer runs out.
    Cooldown { remaining: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    /// User pressed the trigger.
    Activate,
    /// Draw scheduled; start the lockout timer.
    Armed(Duration),
    /// Frame time passed.
    Elapsed(Duration),
}

/// Which of the three button sprites to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonFace {
    Normal,
    Pressed,
    Disabled,
}

impl ButtonFace {
    pub fn asset_key(self) -> &'static str {
        match self {
            ButtonFace::Normal => "playbutton_off",
            ButtonFace::Pressed => "playbutton_on",
            ButtonFace::Disabled => "playbutton_dis",
        }
    }
}

impl InteractionState {
    pub fn accepts_input(self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn button_face(self) -> ButtonFace {
        match self {
            InteractionState::Idle => ButtonFace::Normal,
            InteractionState::Drawing => ButtonFace::Pressed,
            InteractionState::Cooldown { .. } => ButtonFace::Disabled,
        }
    }
}

/// Next state for `event`, or `None` when the event does not apply.
pub fn transition(state: InteractionState, event: InteractionEvent) -> Option<InteractionState> {
    use InteractionEvent::*;
    use InteractionState::*;
    match (state, event) {
        (Idle, Activate) => Some(Drawing),
        (Drawing, Armed(cooldown)) => Some(Cooldown {
            remaining: cooldown,
        }),
        (Cooldown { remaining }, Elapsed(dt)) => Some(if dt >= remaining {
            Idle
        } else {
            Cooldown {
                remaining: remaining - dt,
            }
        }),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct InteractionMachine {
    state: InteractionState,
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Apply `event`; returns whether it was accepted.
    pub fn apply(&mut self, event: InteractionEvent) -> bool {
        match transition(self.state, event) {
            Some(next) => {
                self.state = next;
                true
            }
            None => {
                if !matches!(event, InteractionEvent::Elapsed(_)) {
                    log::debug!("[interaction] {:?} ignored in {:?}", event, self.state);
                }
                false
            }
        }
    }
}
