// src/main.rs - Traffic Rider entry point
use anyhow::Result;

use traffic_rider::constants::GAME_OVER_SCREEN;
use traffic_rider::game::{self, EndReason, Session};
use traffic_rider::rendering::draw_game_over;
use traffic_rider::sdl::{open_music, SdlContext, SdlRenderer};
use traffic_rider::GameConfig;

fn main() -> Result<()> {
    init_tracing();

    let config = GameConfig::from_env();
    tracing::info!(tick_rate = config.tick_rate, "starting {}", config.title);

    let context = SdlContext::init()?;
    let canvas = context.canvas(&config)?;
    let texture_creator = canvas.texture_creator();
    let mut renderer = SdlRenderer::new(canvas, &texture_creator, &context.ttf, &config.assets)?;
    let mut events = context.events(&config)?;
    let mut audio = open_music(&context, &config.assets.music);

    print_controls();

    let mut session = Session::from_config(&config);
    let outcome = game::run(&mut session, &mut events, &mut renderer, audio.as_mut())?;

    if outcome.reason == EndReason::GameOver {
        draw_game_over(&mut renderer, &outcome)?;
        std::thread::sleep(GAME_OVER_SCREEN);
    }

    println!(
        "Final score: {} | Level reached: {} | Coins collected: {}",
        outcome.score, outcome.level, outcome.coins
    );
    Ok(())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

fn print_controls() {
    println!("=== CONTROLS ===");
    println!("← / →   Steer between lanes");
    println!("P       Pause / resume");
    println!("M       Toggle music");
    println!("Esc     Quit");
}
