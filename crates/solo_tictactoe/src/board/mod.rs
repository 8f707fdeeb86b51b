//! Board representation.

mod position;
mod types;

pub use position::Position;
pub use types::{Board, Cell, Side};
