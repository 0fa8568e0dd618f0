use std::collections::VecDeque;

use crate::basic::{Cell, Dir};

pub struct Snake {
    /// Head at the front, tail at the back
    body: VecDeque<Cell>,
}

impl Snake {
    /// All `len` segments start stacked on `pos`
    pub fn new(pos: Cell, len: usize) -> Self {
        Self {
            body: std::iter::repeat(pos).take(len.max(1)).collect(),
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn next_head(&self, dir: Dir) -> Cell {
        self.head().translate(dir)
    }

    pub fn push_head(&mut self, pos: Cell) {
        self.body.push_front(pos);
    }

    pub fn pop_tail(&mut self) -> Option<Cell> {
        // never leave a headless snake behind
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Whether the head overlaps any other segment
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_stacked() {
        let snake = Snake::new(Cell::ORIGIN, 3);
        assert_eq!(snake.len(), 3);
        assert!(snake.body().iter().all(|&c| c == Cell::ORIGIN));

        // zero-length requests still produce a head
        assert_eq!(Snake::new(Cell::ORIGIN, 0).len(), 1);
    }

    #[test]
    fn test_stacked_segments_separate_after_first_move() {
        let mut snake = Snake::new(Cell::ORIGIN, 3);
        assert!(snake.bites_itself());

        snake.push_head(snake.next_head(Dir::Down));
        snake.pop_tail();
        assert!(!snake.bites_itself());
    }

    #[test]
    fn test_pop_tail_keeps_head() {
        let mut snake = Snake::new(Cell { x: 4, y: 4 }, 1);
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.head(), Cell { x: 4, y: 4 });
    }
}
