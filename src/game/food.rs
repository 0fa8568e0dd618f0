use rand::Rng;

use crate::basic::{Cell, CellDim};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Food {
    pub pos: Cell,
}

impl Food {
    /// Picks any cell on the board, including ones covered by the snake
    pub fn spawn<R: Rng>(board_dim: CellDim, rng: &mut R) -> Self {
        Self {
            pos: Cell::random_in(board_dim, rng),
        }
    }
}

#[test]
fn test_spawn_covers_board() {
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    let board_dim = CellDim { x: 2, y: 2 };
    let mut rng = StdRng::seed_from_u64(1);
    let seen: HashSet<_> = (0..500)
        .map(|_| Food::spawn(board_dim, &mut rng).pos)
        .collect();

    assert_eq!(seen.len(), 4);
}
