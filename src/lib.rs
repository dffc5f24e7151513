//! Traffic Rider: weave a bike through highway traffic, grab coins, level up.
//!
//! The simulation (`player`, `entity`, `highway`, `game`) has no SDL
//! dependency and talks to the outside world through the `Renderer`, `Audio`
//! and `EventSource` traits. The `sdl` module provides the real frontend.

pub mod config;
pub mod constants;
pub mod entity;
pub mod game;
pub mod geometry;
pub mod highway;
pub mod input;
pub mod player;
pub mod render;
pub mod rendering;
#[cfg(feature = "sdl")]
pub mod sdl;

pub use config::GameConfig;
pub use entity::{Coin, Entity, Obstacle};
pub use game::{run, EndReason, Session, SessionOutcome};
pub use highway::Highway;
pub use player::Player;
