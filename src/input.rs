use crate::constants::PLAYER_SPEED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Escape,
    P,
    M,
    Other,
}

/// One item from the event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Tick,
    KeyDown(Key),
    KeyUp(Key),
    Close,
}

/// Blocking event queue: ticks, keys and close requests.
pub trait EventSource {
    fn wait_event(&mut self) -> GameEvent;

    /// True when no further event is queued right now.
    fn is_empty(&mut self) -> bool;
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        InputHandler
    }

    // Process a queued event and return the action to take
    pub fn process_event(&mut self, event: &GameEvent) -> InputAction {
        match event {
            GameEvent::Tick => InputAction::Step,
            GameEvent::Close => InputAction::Exit,
            GameEvent::KeyDown(key) => match key {
                Key::Escape => InputAction::Exit,
                Key::Left => InputAction::SetVelocityX(-PLAYER_SPEED),
                Key::Right => InputAction::SetVelocityX(PLAYER_SPEED),
                Key::P => InputAction::TogglePause,
                Key::M => InputAction::ToggleMusic,
                Key::Other => InputAction::None,
            },
            GameEvent::KeyUp(key) => match key {
                Key::Left | Key::Right => InputAction::SetVelocityX(0.0),
                _ => InputAction::None,
            },
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

// Actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    None,
    Step,
    SetVelocityX(f32),
    TogglePause,
    ToggleMusic,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_steer_and_release_stops() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.process_event(&GameEvent::KeyDown(Key::Left)),
            InputAction::SetVelocityX(-5.0)
        );
        assert_eq!(
            input.process_event(&GameEvent::KeyDown(Key::Right)),
            InputAction::SetVelocityX(5.0)
        );
        // releasing either arrow stops the bike
        assert_eq!(
            input.process_event(&GameEvent::KeyUp(Key::Left)),
            InputAction::SetVelocityX(0.0)
        );
    }

    #[test]
    fn escape_and_close_exit() {
        let mut input = InputHandler::new();
        assert_eq!(input.process_event(&GameEvent::KeyDown(Key::Escape)), InputAction::Exit);
        assert_eq!(input.process_event(&GameEvent::Close), InputAction::Exit);
        assert_eq!(input.process_event(&GameEvent::KeyUp(Key::Escape)), InputAction::None);
    }
}
