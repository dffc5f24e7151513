use anyhow::{anyhow, Context, Result};
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::mixer::{self, Sdl2MixerContext};
use sdl2::render::Canvas;
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::Window;
use sdl2::{AudioSubsystem, Sdl, VideoSubsystem};

use crate::config::GameConfig;
use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sdl::events::SdlEvents;

struct AudioContext {
    _mixer: Sdl2MixerContext,
    _audio: AudioSubsystem,
}

impl Drop for AudioContext {
    fn drop(&mut self) {
        mixer::close_audio();
    }
}

/// Every SDL subsystem the game needs. Fields drop in declaration order, so
/// `sdl` goes last.
pub struct SdlContext {
    pub ttf: Sdl2TtfContext,
    audio: Option<AudioContext>,
    _image: Sdl2ImageContext,
    pub video: VideoSubsystem,
    pub sdl: Sdl,
}

impl SdlContext {
    pub fn init() -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| anyhow!("failed to initialize SDL: {}", e))?;
        let video = sdl
            .video()
            .map_err(|e| anyhow!("failed to initialize video: {}", e))?;
        let image = sdl2::image::init(InitFlag::PNG | InitFlag::JPG)
            .map_err(|e| anyhow!("failed to initialize image support: {}", e))?;
        let ttf = sdl2::ttf::init().context("failed to initialize TTF support")?;

        let audio = match Self::init_audio(&sdl) {
            Ok(audio) => Some(audio),
            Err(err) => {
                tracing::warn!("audio unavailable, continuing without sound: {:#}", err);
                None
            }
        };

        Ok(SdlContext {
            ttf,
            audio,
            _image: image,
            video,
            sdl,
        })
    }

    fn init_audio(sdl: &Sdl) -> Result<AudioContext> {
        let audio = sdl.audio().map_err(|e| anyhow!(e))?;
        mixer::open_audio(44_100, mixer::DEFAULT_FORMAT, mixer::DEFAULT_CHANNELS, 1_024)
            .map_err(|e| anyhow!(e))?;
        let mixer_context = match mixer::init(mixer::InitFlag::MP3) {
            Ok(context) => context,
            Err(e) => {
                mixer::close_audio();
                return Err(anyhow!(e));
            }
        };
        mixer::allocate_channels(1);

        Ok(AudioContext {
            _mixer: mixer_context,
            _audio: audio,
        })
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    pub fn canvas(&self, config: &GameConfig) -> Result<Canvas<Window>> {
        let window = self
            .video
            .window(&config.title, SCREEN_WIDTH, SCREEN_HEIGHT)
            .position_centered()
            .build()
            .map_err(|e| anyhow!("failed to create display: {}", e))?;

        window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| anyhow!("failed to create canvas: {}", e))
    }

    pub fn events(&self, config: &GameConfig) -> Result<SdlEvents> {
        let pump = self
            .sdl
            .event_pump()
            .map_err(|e| anyhow!("failed to create event queue: {}", e))?;
        Ok(SdlEvents::new(pump, config.tick_interval()))
    }
}
