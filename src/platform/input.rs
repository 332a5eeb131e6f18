//! Keyboard and pointer mapping
//!
//! Held keys are level-triggered; reset, pause and start are latched until
//! the next tick consumes them.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Reset,
    Pause,
    Start,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "r" | "R" => Some(Key::Reset),
            "Escape" => Some(Key::Pause),
            " " | "Enter" => Some(Key::Start),
            _ => None,
        }
    }
}

/// Accumulated input between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    reset: bool,
    toggle_pause: bool,
    start: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Reset => self.reset = true,
            Key::Pause => self.toggle_pause = true,
            Key::Start => self.start = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            // One-shots are cleared by the tick, not by release
            Key::Reset | Key::Pause | Key::Start => {}
        }
    }

    /// Primary click or tap
    pub fn click(&mut self) {
        self.start = true;
    }

    /// Drop held directions (focus lost, keyup will never arrive)
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    /// Input for the next tick; one-shot intents are consumed
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            reset: self.reset,
            toggle_pause: self.toggle_pause,
            start: self.start,
        };
        self.reset = false;
        self.toggle_pause = false;
        self.start = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom("A"), Some(Key::Left));
        assert_eq!(Key::from_dom("d"), Some(Key::Right));
        assert_eq!(Key::from_dom("R"), Some(Key::Reset));
        assert_eq!(Key::from_dom("Escape"), Some(Key::Pause));
        assert_eq!(Key::from_dom("q"), None);
    }

    #[test]
    fn test_held_keys_persist_one_shots_do_not() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Pause);
        input.click();

        let first = input.take_tick_input();
        assert!(first.left && first.toggle_pause && first.start);

        let second = input.take_tick_input();
        assert!(second.left);
        assert!(!second.toggle_pause && !second.start && !second.reset);

        input.key_up(Key::Left);
        assert!(!input.take_tick_input().left);
    }

    #[test]
    fn test_release_all_on_blur() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Right);
        input.release_all();
        let tick = input.take_tick_input();
        assert!(!tick.left && !tick.right);
    }
}
