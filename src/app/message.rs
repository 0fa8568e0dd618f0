use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextAlign, TextLayout};

use crate::{
    app::{palette::Palette, prefs::Prefs},
    basic::Point,
};

/// A line of text centered on `dest`
pub struct Message {
    pub text: String,
    pub dest: Point,
    pub font_size: f32,
    pub color: Color,
}

impl Message {
    pub fn draw(&self, canvas: &mut Canvas) {
        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size))
            .set_layout(TextLayout {
                h_align: TextAlign::Middle,
                v_align: TextAlign::Middle,
            });

        let dp = DrawParam::default().dest(self.dest).color(self.color);
        canvas.draw(&text, dp)
    }
}

/// Center of the board in window coordinates shifted down by `dy`
fn board_center(prefs: &Prefs, dy: f32) -> Point {
    prefs.board_offset() + prefs.board_size() / 2. + Point { x: 0., y: dy }
}

pub fn score_label(score: u32, prefs: &Prefs, palette: &Palette) -> Message {
    Message {
        text: format!("Score: {}", score),
        dest: Point {
            x: prefs.board_size().x / 2.,
            y: prefs.score_bar_height / 2.,
        },
        font_size: prefs.font_size,
        color: palette.text_color,
    }
}

pub fn start_screen(prefs: &Prefs, palette: &Palette) -> Vec<Message> {
    vec![
        Message {
            text: "SNAKE GAME".to_string(),
            dest: board_center(prefs, -50.),
            font_size: prefs.title_font_size,
            color: palette.text_color,
        },
        Message {
            text: "Use Arrow Keys to Move".to_string(),
            dest: board_center(prefs, 20.),
            font_size: prefs.font_size,
            color: palette.text_color,
        },
        Message {
            text: "Press SPACE to Start".to_string(),
            dest: board_center(prefs, 60.),
            font_size: prefs.font_size,
            color: palette.text_color,
        },
    ]
}

pub fn game_over_screen(score: u32, prefs: &Prefs, palette: &Palette) -> Vec<Message> {
    vec![
        Message {
            text: "GAME OVER".to_string(),
            dest: board_center(prefs, -50.),
            font_size: prefs.game_over_font_size,
            color: palette.game_over_color,
        },
        Message {
            text: format!("Final Score: {}", score),
            dest: board_center(prefs, 50.),
            font_size: prefs.font_size,
            color: palette.text_color,
        },
        Message {
            text: "Press SPACE to Play Again".to_string(),
            dest: board_center(prefs, 100.),
            font_size: prefs.font_size,
            color: palette.text_color,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label() {
        let label = score_label(12, &Prefs::default(), &Palette::classic());
        assert_eq!(label.text, "Score: 12");
        assert_eq!(label.dest, Point { x: 350., y: 25. });
    }

    #[test]
    fn test_game_over_screen_shows_final_score() {
        let prefs = Prefs::default();
        let lines = game_over_screen(4, &prefs, &Palette::classic());
        let texts: Vec<_> = lines.iter().map(|m| m.text.as_str()).collect();

        assert_eq!(texts, ["GAME OVER", "Final Score: 4", "Press SPACE to Play Again"]);
        assert_eq!(lines[0].color, Color::RED);
    }

    #[test]
    fn test_start_screen_is_below_score_bar() {
        let prefs = Prefs::default();
        for message in start_screen(&prefs, &Palette::classic()) {
            assert!(message.dest.y > prefs.score_bar_height);
            assert_eq!(message.dest.x, 350.);
        }
    }
}
