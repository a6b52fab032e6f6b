#[macro_use]
extern crate error_chain;

use error_chain::ChainedError;
use log::{error, info};
use macroquad::prelude::{get_frame_time, load_ttf_font_from_bytes, next_frame, Conf, Font};
use macroquad::Window;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

mod app;
mod console;
mod keys;
mod render;
mod wordle;

use app::App;
use wordle::{ErrorKind, JsonDictionary};

const DICTIONARY_PATH: &str = "constants/validGuesses.json";
const FONT_BYTES: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

fn window_conf() -> Conf {
    Conf {
        window_title: "CheGuordle!".to_owned(),
        window_width: render::SCREEN_WIDTH as i32,
        window_height: render::SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn fatal(e: &wordle::Error) -> ! {
    error!("{}", e.display_chain());
    std::process::exit(1)
}

fn load_font() -> wordle::Result<Font> {
    load_ttf_font_from_bytes(FONT_BYTES)
        .map_err(|e| ErrorKind::ResourceUnavailable(format!("embedded font ({:?})", e)).into())
}

fn do_main() -> wordle::Result<App> {
    let dictionary = JsonDictionary::load(DICTIONARY_PATH)?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(seed);
    App::new(dictionary, &mut rng)
}

async fn game_loop(mut app: App) {
    let font = match load_font() {
        Ok(font) => font,
        Err(e) => fatal(&e),
    };

    loop {
        app.update(&keys::pressed_keys(), get_frame_time());
        render::draw(&app, &font);
        next_frame().await;
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = match do_main() {
        Ok(app) => app,
        Err(e) => fatal(&e),
    };

    info!("Opening window");
    Window::from_config(window_conf(), game_loop(app));
}
