use sdl2::mixer::Music;

use crate::render::{Audio, Silence};
use crate::sdl::context::SdlContext;

/// Background track looped through SDL_mixer.
pub struct SdlMusic {
    music: Music<'static>,
}

impl SdlMusic {
    pub fn new(music: Music<'static>) -> Self {
        SdlMusic { music }
    }
}

impl Audio for SdlMusic {
    fn play_looped(&mut self) {
        if let Err(e) = self.music.play(-1) {
            tracing::warn!("could not start music: {}", e);
        }
    }

    fn stop(&mut self) {
        Music::halt();
    }

    fn is_playing(&self) -> bool {
        Music::is_playing()
    }
}

impl Drop for SdlMusic {
    fn drop(&mut self) {
        Music::halt();
    }
}

/// Music for the session, or silence when the device or the track is missing.
pub fn open_music(context: &SdlContext, path: &str) -> Box<dyn Audio> {
    if !context.has_audio() {
        return Box::new(Silence);
    }

    match Music::from_file(path) {
        Ok(music) => Box::new(SdlMusic::new(music)),
        Err(e) => {
            tracing::warn!("failed to load game sound {}: {}", path, e);
            Box::new(Silence)
        }
    }
}
