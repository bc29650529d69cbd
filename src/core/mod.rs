//! Core functionality: grid storage and affine geometry

pub mod grid;
pub mod transform;

pub use grid::CellGrid;
pub use transform::{CellMapping, Transform2D};
