use std::ops::Neg;

use crate::basic::Cell;
use Dir::*;

// defined in clockwise order starting at Up
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => Up,
            1 => Right,
            2 => Down,
            _ => Left,
        }
    }
}

/// The reverse direction
impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    pub fn iter() -> impl Iterator<Item = Self> {
        [Up, Right, Down, Left].into_iter()
    }

    /// One cell in this direction, y grows downward
    pub fn delta(self) -> Cell {
        match self {
            Up => Cell { x: 0, y: -1 },
            Right => Cell { x: 1, y: 0 },
            Down => Cell { x: 0, y: 1 },
            Left => Cell { x: -1, y: 0 },
        }
    }

    pub fn is_reverse_of(self, other: Self) -> bool {
        -self == other
    }
}

#[test]
fn test_reverse() {
    for (dir, reverse) in [(Up, Down), (Down, Up), (Left, Right), (Right, Left)] {
        assert_eq!(-dir, reverse);
        assert!(dir.is_reverse_of(reverse));
        assert!(!dir.is_reverse_of(dir));
    }
}

#[test]
fn test_deltas_cancel_out() {
    for dir in Dir::iter() {
        assert_eq!(dir.delta() + (-dir).delta(), Cell { x: 0, y: 0 });
    }
}
