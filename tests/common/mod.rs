#![allow(dead_code)]

use std::collections::VecDeque;

use traffic_rider::input::{EventSource, GameEvent};
use traffic_rider::render::{Align, Audio, Color, Renderer, Sprite};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear,
    Sprite(Sprite, f32, f32),
    Rect(f32, f32, f32, f32),
    Text(String),
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
}

impl RecordingRenderer {
    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|call| **call == Call::Present).count()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn sprites(&self) -> Vec<(Sprite, f32, f32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Sprite(sprite, x, y) => Some((*sprite, *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, _color: Color) -> anyhow::Result<()> {
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32) -> anyhow::Result<()> {
        self.calls.push(Call::Sprite(sprite, x, y));
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, _color: Color) -> anyhow::Result<()> {
        self.calls.push(Call::Rect(x, y, width, height));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32, _color: Color, _align: Align) -> anyhow::Result<()> {
        self.calls.push(Call::Text(text.to_string()));
        Ok(())
    }

    fn present(&mut self) {
        self.calls.push(Call::Present);
    }
}

#[derive(Debug, Default)]
pub struct FakeAudio {
    pub playing: bool,
    pub plays: usize,
    pub stops: usize,
}

impl Audio for FakeAudio {
    fn play_looped(&mut self) {
        self.playing = true;
        self.plays += 1;
    }

    fn stop(&mut self) {
        self.playing = false;
        self.stops += 1;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// Replays a fixed script, then asks to close.
pub struct ScriptedEvents {
    queue: VecDeque<GameEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = GameEvent>) -> Self {
        ScriptedEvents {
            queue: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn wait_event(&mut self) -> GameEvent {
        self.queue.pop_front().unwrap_or(GameEvent::Close)
    }

    fn is_empty(&mut self) -> bool {
        self.queue.is_empty()
    }
}
