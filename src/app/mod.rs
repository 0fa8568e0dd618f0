use std::time::Instant;

use ggez::{
    conf::{WindowMode, WindowSetup},
    event::EventHandler,
    graphics::{Canvas, DrawMode, DrawParam, Mesh, MeshBuilder, Rect},
    input::keyboard::{KeyCode, KeyInput},
    winit::dpi::PhysicalPosition,
    Context,
};
use log::warn;

pub use app_error::{AppError, AppResult, During};
use palette::Palette;
pub use prefs::Prefs;

use crate::{
    basic::Point,
    game::{Game, State},
};

mod app_error;
mod keyboard_control;
mod message;
mod palette;
mod prefs;

pub struct App {
    game: Game,
    prefs: Prefs,
    palette: Palette,
}

impl App {
    pub fn new(prefs: Prefs) -> Self {
        Self {
            game: Game::new(prefs.game),
            prefs,
            palette: Palette::classic(),
        }
    }

    pub fn wm(&self) -> WindowMode {
        let Point { x, y } = self.prefs.window_size();
        WindowMode::default().dimensions(x, y).resizable(false)
    }

    pub fn ws(&self) -> WindowSetup {
        WindowSetup::default().title("Snake Game").vsync(true)
    }

    fn draw_board(&self, canvas: &mut Canvas, ctx: &Context) -> AppResult {
        let side = self.prefs.cell_side;
        let offset = self.prefs.board_offset();

        let builder = &mut MeshBuilder::new();
        for &segment in self.game.snake().body() {
            let Point { x, y } = segment.to_point(side) + offset;
            builder.rectangle(
                DrawMode::fill(),
                Rect::new(x, y, side, side),
                self.palette.snake_color,
            )?;
        }

        let food_center = self.game.food().pos.to_point(side) + offset + Point::square(side / 2.);
        builder.circle(
            DrawMode::fill(),
            food_center,
            side / 2.,
            0.1,
            self.palette.food_color,
        )?;

        canvas.draw(&Mesh::from_data(ctx, builder.build()), DrawParam::default());
        Ok(())
    }
}

/// Places the window in the middle of the monitor it opened on
pub fn center_window(ctx: &Context) {
    let window = ctx.gfx.window();
    let Some(monitor) = window.current_monitor() else {
        warn!("no monitor found, leaving window where it is");
        return;
    };

    let screen = Point::from(monitor.size());
    let size = Point::from(window.outer_size());
    let origin = monitor.position();
    let Point { x, y } = (screen - size) / 2.;
    window.set_outer_position(PhysicalPosition::new(
        origin.x + x as i32,
        origin.y + y as i32,
    ));
}

impl EventHandler<AppError> for App {
    fn update(&mut self, _ctx: &mut Context) -> AppResult {
        self.game.update(Instant::now());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);

        let screen = match self.game.state() {
            State::NotStarted => message::start_screen(&self.prefs, &self.palette),
            State::Running => {
                self.draw_board(&mut canvas, ctx)
                    .during("App::draw_board")?;
                vec![]
            }
            State::GameOver => {
                message::game_over_screen(self.game.score(), &self.prefs, &self.palette)
            }
        };
        message::score_label(self.game.score(), &self.prefs, &self.palette).draw(&mut canvas);
        for message in &screen {
            message.draw(&mut canvas);
        }

        canvas
            .finish(ctx)
            .map_err(AppError::from)
            .during("App::draw")
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> AppResult {
        let Some(key) = input.keycode else {
            return Ok(());
        };

        if let Some(dir) = self.prefs.controls.dir(key) {
            self.game.change_direction(dir);
            return Ok(());
        }

        match key {
            KeyCode::Space => match self.game.state() {
                State::NotStarted | State::GameOver => self.game.start_game(Instant::now()),
                State::Running => (),
            },
            KeyCode::Escape => ctx.request_quit(),
            _ => (),
        }
        Ok(())
    }
}
