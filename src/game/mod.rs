use std::time::{Duration, Instant};

use itertools::Itertools;
use log::{debug, info};
use rand::{rngs::ThreadRng, thread_rng, Rng};

pub use control::State;
use control::Control;
pub use food::Food;
pub use snake::Snake;

use crate::basic::{Cell, CellDim, Dir};

mod control;
mod food;
mod snake;

#[derive(Copy, Clone, Debug)]
pub struct Settings {
    pub board_dim: CellDim,
    pub start_pos: Cell,
    pub start_len: usize,
    pub start_dir: Dir,
    pub tick_period: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_dim: CellDim { x: 14, y: 14 },
            start_pos: Cell::ORIGIN,
            start_len: 3,
            start_dir: Dir::Down,
            tick_period: Duration::from_millis(100),
        }
    }
}

// builder
impl Settings {
    pub fn board_dim(mut self, board_dim: CellDim) -> Self {
        self.board_dim = board_dim;
        self
    }
}

pub struct Game<R: Rng = ThreadRng> {
    settings: Settings,
    control: Control,

    snake: Snake,
    food: Food,
    score: u32,

    /// Direction of the next move, staged by key presses
    dir: Dir,

    rng: R,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(settings: Settings, mut rng: R) -> Self {
        Self {
            control: Control::new(settings.tick_period),
            snake: Snake::new(settings.start_pos, settings.start_len),
            food: Food::spawn(settings.board_dim, &mut rng),
            score: 0,
            dir: settings.start_dir,
            settings,
            rng,
        }
    }

    pub fn state(&self) -> State {
        self.control.state()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The direction the snake will take on the next tick
    pub fn heading(&self) -> Dir {
        self.dir
    }

    pub fn tick_pending(&self) -> bool {
        self.control.is_pending()
    }

    /// Starts a fresh session, the first tick fires one period after `now`
    pub fn start_game(&mut self, now: Instant) {
        if self.state() == State::Running {
            return;
        }

        self.score = 0;
        self.dir = self.settings.start_dir;
        self.snake = Snake::new(self.settings.start_pos, self.settings.start_len);
        self.food = Food::spawn(self.settings.board_dim, &mut self.rng);
        self.control.play(now);

        info!("new game, food at {:?}", self.food.pos);
    }

    /// Reversing the current heading is ignored
    pub fn change_direction(&mut self, dir: Dir) {
        if self.state() != State::Running || dir.is_reverse_of(self.dir) {
            return;
        }

        if dir != self.dir {
            debug!("heading {:?}", dir);
        }
        self.dir = dir;
    }

    /// Runs every tick that is due by `now`
    pub fn update(&mut self, now: Instant) {
        while let Some(due) = self.control.poll(now) {
            self.tick(due);
        }
    }

    /// Advances the snake one cell, `at` is the instant the tick was due
    pub fn tick(&mut self, at: Instant) {
        if self.state() != State::Running {
            return;
        }

        let new_head = self.snake.next_head(self.dir);
        self.snake.push_head(new_head);

        if new_head == self.food.pos {
            self.score += 1;
            self.food = Food::spawn(self.settings.board_dim, &mut self.rng);
            debug!("ate at {:?}, score {}, food at {:?}", new_head, self.score, self.food.pos);
        } else {
            self.snake.pop_tail();
        }

        if self.check_collisions() {
            self.game_over();
        } else {
            self.control.schedule(at);
        }
    }

    /// Whether the head has left the board or run into the body
    pub fn check_collisions(&self) -> bool {
        !self.settings.board_dim.contains(self.snake.head()) || self.snake.bites_itself()
    }

    fn game_over(&mut self) {
        self.control.game_over();
        info!(
            "game over at {:?}, final score {}, length {}",
            self.snake.head(),
            self.score,
            self.snake.len()
        );
        debug!(
            "body: {}",
            self.snake.body().iter().map(|c| format!("{:?}", c)).join(" ")
        );
    }
}
