mod coord;
mod line;
mod ring;
mod triangle;

pub use coord::Coord;
pub use line::Line;
pub use ring::Ring;
pub use triangle::Triangle;
