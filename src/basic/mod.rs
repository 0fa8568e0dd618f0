pub use cell::{Cell, CellDim};
pub use dir::Dir;
pub use point::Point;

mod cell;
mod dir;
mod point;
