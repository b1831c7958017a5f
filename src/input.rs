//! Input mapping
//!
//! Bridges the host's key events to the simulation. The host reports key
//! down/up for named keys; held actions live in a plain set (insert/remove,
//! no ordering guarantees needed) and one-shot commands queue until the next
//! tick consumes them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, TickInput};

/// Continuous control action, active while its key is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    LeanForward,
    LeanBackward,
    BalanceLeft,
    BalanceRight,
}

impl Action {
    /// Map a host key name to a control action (WASD plus arrows)
    pub fn from_key(key: &str) -> Option<Action> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Action::LeanForward),
            "s" | "S" | "ArrowDown" => Some(Action::LeanBackward),
            "a" | "A" | "ArrowLeft" => Some(Action::BalanceLeft),
            "d" | "D" | "ArrowRight" => Some(Action::BalanceRight),
            _ => None,
        }
    }
}

/// One-shot command, consumed by the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Jump,
    PrepareLanding,
    Reset,
}

/// Collects key events between ticks and assembles per-tick input
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    held: HashSet<Action>,
    pending: Vec<Command>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn queue(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Host key-down handler. Space is context-sensitive the way the jump
    /// feels in play: leave the gate, take off, then brace for landing.
    pub fn key_down(&mut self, key: &str, phase: GamePhase) {
        match key {
            " " | "Enter" => {
                let command = match phase {
                    GamePhase::Ready => Some(Command::Start),
                    GamePhase::Inrun => Some(Command::Jump),
                    GamePhase::Flight => Some(Command::PrepareLanding),
                    GamePhase::Landed | GamePhase::Finished => None,
                };
                if let Some(command) = command {
                    self.queue(command);
                }
            }
            "Escape" => self.queue(Command::Reset),
            _ => {
                if let Some(action) = Action::from_key(key) {
                    self.press(action);
                }
            }
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(action) = Action::from_key(key) {
            self.release(action);
        }
    }

    /// Assemble the input for one tick, draining queued commands
    pub fn take_tick_input(&mut self) -> TickInput {
        let mut input = TickInput {
            lean_forward: self.is_held(Action::LeanForward),
            lean_backward: self.is_held(Action::LeanBackward),
            balance_left: self.is_held(Action::BalanceLeft),
            balance_right: self.is_held(Action::BalanceRight),
            ..Default::default()
        };
        for command in self.pending.drain(..) {
            match command {
                Command::Start => input.start = true,
                Command::Jump => input.jump = true,
                Command::PrepareLanding => input.prepare_landing = true,
                Command::Reset => input.reset = true,
            }
        }
        input
    }
}
