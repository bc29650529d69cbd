//! Domain logic: colors and color-generation strategies

pub mod color;
pub mod strategy;

pub use color::Rgba;
pub use strategy::{ColorStrategy, Rainbow};
