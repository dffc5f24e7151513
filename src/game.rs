use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GameConfig;
use crate::highway::Highway;
use crate::input::{EventSource, GameEvent, InputAction, InputHandler};
use crate::player::Player;
use crate::render::{Audio, Color, Renderer};
use crate::rendering::{draw_hud, HudView};

/// Countdown for the "LEVEL UP!" overlay. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelBanner {
    duration: u32,
    remaining: u32,
}

impl LevelBanner {
    pub fn new(duration: u32) -> Self {
        LevelBanner { duration, remaining: 0 }
    }

    pub fn start(&mut self) {
        self.remaining = self.duration;
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_visible(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    GameOver,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub score: u32,
    pub level: u32,
    pub coins: u32,
    pub reason: EndReason,
}

pub struct Session<R: Rng = StdRng> {
    pub player: Player,
    pub highway: Highway<R>,
    input: InputHandler,
    banner: LevelBanner,
    previous_level: u32,
    paused: bool,
    running: bool,
    redraw: bool,
}

impl Session<StdRng> {
    pub fn from_config(config: &GameConfig) -> Self {
        let highway = match config.seed {
            Some(seed) => {
                tracing::info!(seed, "seeded session");
                Highway::seeded(seed)
            }
            None => Highway::new(),
        };
        Session::new(highway, config.banner_ticks)
    }
}

impl<R: Rng> Session<R> {
    pub fn new(highway: Highway<R>, banner_ticks: u32) -> Self {
        let previous_level = highway.level();
        Session {
            player: Player::at_start(),
            highway,
            input: InputHandler::new(),
            banner: LevelBanner::new(banner_ticks),
            previous_level,
            paused: false,
            running: true,
            redraw: true,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn banner(&self) -> &LevelBanner {
        &self.banner
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn is_finished(&self) -> bool {
        !self.running || self.highway.is_game_over()
    }

    pub fn handle_event<A: Audio + ?Sized>(&mut self, event: GameEvent, audio: &mut A) {
        match self.input.process_event(&event) {
            InputAction::Step => {
                if !self.paused {
                    self.tick();
                    self.redraw = true;
                }
            }
            InputAction::SetVelocityX(velocity) => self.player.velocity_x = velocity,
            InputAction::TogglePause => {
                self.paused = !self.paused;
                if self.paused {
                    audio.stop();
                } else {
                    audio.play_looped();
                }
                tracing::info!(paused = self.paused, "pause toggled");
            }
            InputAction::ToggleMusic => {
                if audio.is_playing() {
                    audio.stop();
                } else if !self.paused {
                    audio.play_looped();
                }
            }
            InputAction::Exit => {
                tracing::info!("exit requested");
                self.running = false;
            }
            InputAction::None => {}
        }
    }

    /// One simulation step: bike, road, collisions, banner countdown.
    pub fn tick(&mut self) {
        self.player.update();
        self.highway.update();
        self.highway.check_collisions(&self.player);

        if self.highway.level() > self.previous_level {
            self.previous_level = self.highway.level();
            self.banner.start();
        }
        self.banner.tick();
    }

    pub fn hud_view(&self) -> HudView {
        HudView {
            score: self.highway.score(),
            level: self.highway.level(),
            coins: self.highway.coins_collected(),
            coin_target: self.highway.coin_target(),
            banner_level: self.banner.is_visible().then(|| self.highway.level()),
            paused: self.paused,
        }
    }

    pub fn render<G: Renderer + ?Sized>(&self, renderer: &mut G) -> anyhow::Result<()> {
        renderer.clear(Color::BLACK)?;
        self.highway.draw(renderer, &self.player)?;
        draw_hud(renderer, &self.hud_view())?;
        renderer.present();
        Ok(())
    }

    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            score: self.highway.score(),
            level: self.highway.level(),
            coins: self.highway.coins_collected(),
            reason: if self.highway.is_game_over() {
                EndReason::GameOver
            } else {
                EndReason::Quit
            },
        }
    }
}

/// Drive a session until the player quits or crashes.
///
/// Exactly one event is handled per iteration. A frame is drawn only when a
/// tick asked for one and nothing else is waiting in the queue.
pub fn run<R, E, G, A>(
    session: &mut Session<R>,
    events: &mut E,
    renderer: &mut G,
    audio: &mut A,
) -> anyhow::Result<SessionOutcome>
where
    R: Rng,
    E: EventSource + ?Sized,
    G: Renderer + ?Sized,
    A: Audio + ?Sized,
{
    audio.play_looped();
    tracing::info!("session started");

    while !session.is_finished() {
        let event = events.wait_event();
        session.handle_event(event, audio);

        if session.redraw && events.is_empty() {
            session.redraw = false;
            session.render(renderer)?;
        }
    }

    audio.stop();

    let outcome = session.outcome();
    tracing::info!(
        score = outcome.score,
        level = outcome.level,
        coins = outcome.coins,
        reason = ?outcome.reason,
        "session finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::render::Silence;
    use rand::SeedableRng;

    fn quiet_session() -> Session<StdRng> {
        Session::new(Highway::empty(StdRng::seed_from_u64(0)), 180)
    }

    #[test]
    fn banner_counts_down_and_hides() {
        let mut banner = LevelBanner::new(3);
        assert!(!banner.is_visible());
        banner.start();
        banner.tick();
        assert_eq!(banner.remaining(), 2);
        banner.tick();
        banner.tick();
        banner.tick();
        assert!(!banner.is_visible());
    }

    #[test]
    fn pause_suspends_ticks() {
        let mut session = quiet_session();
        let mut audio = Silence;
        session.handle_event(GameEvent::KeyDown(Key::P), &mut audio);
        session.handle_event(GameEvent::Tick, &mut audio);
        assert_eq!(session.highway.score(), 0);

        session.handle_event(GameEvent::KeyDown(Key::P), &mut audio);
        session.handle_event(GameEvent::Tick, &mut audio);
        assert_eq!(session.highway.score(), 1);
    }

    #[test]
    fn steering_survives_pause() {
        let mut session = quiet_session();
        let mut audio = Silence;
        session.handle_event(GameEvent::KeyDown(Key::P), &mut audio);
        session.handle_event(GameEvent::KeyDown(Key::Right), &mut audio);
        assert_eq!(session.player.velocity_x, 5.0);
        assert!(!session.is_finished());
    }

    #[test]
    fn level_change_starts_banner() {
        let highway = Highway::empty(StdRng::seed_from_u64(0)).with_progress(11, 0);
        let mut session = Session::new(highway, 180);
        session.highway.add(crate::entity::Coin::new(490.0, 710.0));
        session.tick();
        assert!(session.banner().is_visible());
        assert_eq!(session.banner().remaining(), 179);
        assert_eq!(session.hud_view().banner_level, Some(2));
    }

    #[test]
    fn quitting_reports_quit() {
        let mut session = quiet_session();
        session.handle_event(GameEvent::Close, &mut Silence);
        assert!(session.is_finished());
        assert_eq!(session.outcome().reason, EndReason::Quit);
    }
}
