use ggez::graphics::Color;

pub struct Palette {
    pub background_color: Color,
    pub text_color: Color,
    pub game_over_color: Color,
    pub snake_color: Color,
    pub food_color: Color,
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            background_color: Color::BLACK,
            text_color: Color::WHITE,
            game_over_color: Color::RED,
            snake_color: Color::from_rgb(0, 255, 0),
            food_color: Color::from_rgb(255, 0, 0),
        }
    }
}
