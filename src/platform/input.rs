//! Key events → per-tick intents
//!
//! The host feeds press/release events as they arrive; the game loop reads one
//! `Intents` snapshot per tick. Input timing never leaks into simulation timing.

use crate::sim::Intents;

/// Logical controls, independent of any key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Ascend,
    SteerLeft,
    SteerRight,
    /// Start a new run (only honoured by the host when the run is over)
    Restart,
}

/// Held-state of every control
#[derive(Debug, Clone, Default)]
pub struct InputState {
    ascend: bool,
    steer_left: bool,
    steer_right: bool,
    restart_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        match control {
            Control::Ascend => self.ascend = true,
            Control::SteerLeft => self.steer_left = true,
            Control::SteerRight => self.steer_right = true,
            Control::Restart => self.restart_requested = true,
        }
    }

    pub fn release(&mut self, control: Control) {
        match control {
            Control::Ascend => self.ascend = false,
            Control::SteerLeft => self.steer_left = false,
            Control::SteerRight => self.steer_right = false,
            // Edge-triggered; cleared by `take_restart`
            Control::Restart => {}
        }
    }

    /// Snapshot of held controls for this tick
    pub fn intents(&self) -> Intents {
        Intents {
            ascend: self.ascend,
            steer_left: self.steer_left,
            steer_right: self.steer_right,
        }
    }

    /// Consume a pending restart request
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
