use crate::{
    app::keyboard_control::Controls,
    basic::{CellDim, Point},
    game::Settings,
};

const BOARD_SIDE: usize = 700;
const CELL_SIDE: usize = 50;
const_assert_eq!(BOARD_SIDE % CELL_SIDE, 0);

pub struct Prefs {
    /// Side of a board cell in pixels
    pub cell_side: f32,
    /// Height of the score label above the board
    pub score_bar_height: f32,

    pub title_font_size: f32,
    pub game_over_font_size: f32,
    pub font_size: f32,

    pub controls: Controls,
    pub game: Settings,
}

impl Default for Prefs {
    fn default() -> Self {
        let cells = (BOARD_SIDE / CELL_SIDE) as isize;
        Self {
            cell_side: CELL_SIDE as f32,
            score_bar_height: 50.,

            title_font_size: 50.,
            game_over_font_size: 70.,
            font_size: 20.,

            controls: Controls::default(),
            game: Settings::default().board_dim(CellDim { x: cells, y: cells }),
        }
    }
}

impl Prefs {
    /// Board size in pixels
    pub fn board_size(&self) -> Point {
        self.game.board_dim.to_point(self.cell_side)
    }

    /// Board plus score bar
    pub fn window_size(&self) -> Point {
        self.board_size() + Point { x: 0., y: self.score_bar_height }
    }

    /// Where the board's top-left corner is drawn
    pub fn board_offset(&self) -> Point {
        Point { x: 0., y: self.score_bar_height }
    }
}

#[test]
fn test_default_window_size() {
    let prefs = Prefs::default();
    assert_eq!(prefs.game.board_dim, CellDim { x: 14, y: 14 });
    assert_eq!(prefs.board_size(), Point::square(700.));
    assert_eq!(prefs.window_size(), Point { x: 700., y: 750. });
}
