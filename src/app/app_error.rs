use std::{
    error::Error,
    fmt,
    fmt::{Debug, Display, Formatter},
};

use ggez::GameError;
use itertools::Itertools;
use log::SetLoggerError;

/// What went wrong outside the game rules, collisions are never errors
#[derive(Debug)]
pub enum AppErrorKind {
    /// Window, graphics or event loop failure reported by ggez
    Graphics(GameError),
    /// A global logger was already installed
    Logger(SetLoggerError),
}

impl Display for AppErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Graphics(e) => write!(f, "graphics: {}", e),
            AppErrorKind::Logger(e) => write!(f, "logger: {}", e),
        }
    }
}

/// Steps are recorded innermost first, as the error travels outward
#[must_use]
pub struct AppError {
    kind: AppErrorKind,
    steps: Vec<&'static str>,
}

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self { kind: AppErrorKind::Graphics(e), steps: vec![] }
    }
}

impl From<SetLoggerError> for AppError {
    fn from(e: SetLoggerError) -> Self {
        Self { kind: AppErrorKind::Logger(e), steps: vec![] }
    }
}

impl AppError {
    pub fn during(mut self, step: &'static str) -> Self {
        self.steps.push(step);
        self
    }
}

// printed by main on exit, outermost step first:
//   snake_game failed: graphics: ... (main > App::draw)
impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "snake_game failed: {}", self.kind)?;
        if !self.steps.is_empty() {
            write!(f, " ({})", self.steps.iter().rev().join(" > "))?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            AppErrorKind::Graphics(e) => Some(e),
            AppErrorKind::Logger(e) => Some(e),
        }
    }
}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait During {
    fn during(self, step: &'static str) -> Self;
}

impl<T> During for AppResult<T> {
    fn during(self, step: &'static str) -> Self {
        self.map_err(|e| e.during(step))
    }
}

#[test]
fn test_steps_print_outermost_first() {
    let res: AppResult = Err(GameError::CustomError("no adapter".to_string()).into());
    let err = res.during("App::draw_board").during("App::draw").unwrap_err();

    assert!(matches!(err.kind, AppErrorKind::Graphics(_)));
    assert!(err.source().is_some());
    let printed = format!("{}", err);
    assert!(printed.starts_with("snake_game failed: graphics: "), "{}", printed);
    assert!(printed.contains("no adapter"), "{}", printed);
    assert!(printed.ends_with(" (App::draw > App::draw_board)"), "{}", printed);
}
