use ggez::input::keyboard::KeyCode;

use crate::basic::Dir;

#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Controls {
    pub fn arrows() -> Self {
        Self {
            up: KeyCode::Up,
            down: KeyCode::Down,
            left: KeyCode::Left,
            right: KeyCode::Right,
        }
    }

    pub fn dir(&self, key: KeyCode) -> Option<Dir> {
        match key {
            k if k == self.up => Some(Dir::Up),
            k if k == self.down => Some(Dir::Down),
            k if k == self.left => Some(Dir::Left),
            k if k == self.right => Some(Dir::Right),
            _ => None,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::arrows()
    }
}

#[test]
fn test_arrow_keys() {
    use KeyCode::{Down, Left, Right, Space, Up, W};

    let controls = Controls::default();
    assert_eq!(controls.dir(Up), Some(Dir::Up));
    assert_eq!(controls.dir(Down), Some(Dir::Down));
    assert_eq!(controls.dir(Left), Some(Dir::Left));
    assert_eq!(controls.dir(Right), Some(Dir::Right));
    assert_eq!(controls.dir(Space), None);
    assert_eq!(controls.dir(W), None);
}
