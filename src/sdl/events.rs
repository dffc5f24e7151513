use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use crate::input::{EventSource, GameEvent, Key};

// Ticks further behind than this are dropped instead of replayed
const MAX_TICK_BACKLOG: u32 = 5;

/// SDL event pump plus a fixed-rate tick timer.
pub struct SdlEvents {
    pump: EventPump,
    interval: Duration,
    next_tick: Instant,
    pending: Option<GameEvent>,
}

impl SdlEvents {
    pub fn new(pump: EventPump, interval: Duration) -> Self {
        SdlEvents {
            pump,
            interval,
            next_tick: Instant::now() + interval,
            pending: None,
        }
    }

    fn tick_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    fn advance_tick(&mut self, now: Instant) {
        self.next_tick += self.interval;
        if now > self.next_tick + self.interval * MAX_TICK_BACKLOG {
            self.next_tick = now + self.interval;
        }
    }
}

impl EventSource for SdlEvents {
    fn wait_event(&mut self) -> GameEvent {
        if let Some(event) = self.pending.take() {
            return event;
        }

        loop {
            let now = Instant::now();
            if self.tick_due(now) {
                self.advance_tick(now);
                return GameEvent::Tick;
            }

            let timeout = (self.next_tick - now).as_millis().max(1) as u32;
            if let Some(event) = self.pump.wait_event_timeout(timeout) {
                if let Some(event) = translate(&event) {
                    return event;
                }
            }
        }
    }

    fn is_empty(&mut self) -> bool {
        if self.pending.is_some() || self.tick_due(Instant::now()) {
            return false;
        }

        while let Some(event) = self.pump.poll_event() {
            if let Some(event) = translate(&event) {
                self.pending = Some(event);
                return false;
            }
        }
        true
    }
}

pub fn translate(event: &Event) -> Option<GameEvent> {
    match event {
        Event::Quit { .. } => Some(GameEvent::Close),
        Event::KeyDown { keycode: Some(keycode), repeat: false, .. } => Some(GameEvent::KeyDown(map_key(*keycode))),
        Event::KeyUp { keycode: Some(keycode), .. } => Some(GameEvent::KeyUp(map_key(*keycode))),
        _ => None,
    }
}

fn map_key(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Escape => Key::Escape,
        Keycode::P => Key::P,
        Keycode::M => Key::M,
        _ => Key::Other,
    }
}
