mod error;
mod materialize;
mod owner;
mod primitives;

pub use error::{MaterializeError, TreeError};
pub use materialize::{create_tree, materialize};
