use std::fmt::{Debug, Error, Formatter};

use rand::Rng;

use crate::basic::{Dir, Point};

/// A position on the board in whole cells, (0, 0) is the top-left corner
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add, Sub)]
pub struct Cell {
    pub x: isize,
    pub y: isize,
}

/// Board size in cells
pub type CellDim = Cell;

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Top-left corner of the cell in pixels
    pub fn to_point(self, cell_side: f32) -> Point {
        Point {
            x: self.x as f32 * cell_side,
            y: self.y as f32 * cell_side,
        }
    }

    #[must_use]
    pub fn translate(self, dir: Dir) -> Self {
        self + dir.delta()
    }

    /// Uniformly distributed over the whole board
    pub fn random_in<R: Rng>(dim: CellDim, rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0..dim.x),
            y: rng.gen_range(0..dim.y),
        }
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

#[test]
fn test_contains() {
    let dim = CellDim { x: 14, y: 14 };
    [
        ((0, 0), true),
        ((13, 13), true),
        ((13, 0), true),
        ((14, 0), false),
        ((0, 14), false),
        ((-1, 5), false),
        ((5, -1), false),
    ]
    .iter()
    .for_each(|&((x, y), inside)| {
        assert_eq!(dim.contains(Cell { x, y }), inside, "<{}, {}>", x, y);
    });
}

#[test]
fn test_to_point() {
    let point = Cell { x: 0, y: 1 }.to_point(50.);
    assert_eq!((point.x, point.y), (0., 50.));
}

#[test]
fn test_random_in_stays_on_board() {
    use rand::{rngs::StdRng, SeedableRng};

    let dim = CellDim { x: 3, y: 2 };
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        assert!(dim.contains(Cell::random_in(dim, &mut rng)));
    }
}
