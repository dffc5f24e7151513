//! SDL2 frontend: window, textures, fonts, music and the event queue.

pub mod audio;
pub mod context;
pub mod events;
pub mod renderer;

pub use audio::{open_music, SdlMusic};
pub use context::SdlContext;
pub use events::SdlEvents;
pub use renderer::SdlRenderer;
