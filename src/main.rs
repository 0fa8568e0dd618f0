#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate static_assertions;

use ggez::{event, ContextBuilder};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::app::{App, AppError, AppResult, During, Prefs};

mod app;
mod basic;
mod game;

fn main() -> AppResult {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let app = App::new(Prefs::default());

    let (ctx, event_loop) = ContextBuilder::new("snake_game", "snake_game")
        .window_mode(app.wm())
        .window_setup(app.ws())
        .build()
        .map_err(AppError::from)
        .during("main")?;

    app::center_window(&ctx);

    info!("window ready, press SPACE to start");
    event::run(ctx, event_loop, app)
}
