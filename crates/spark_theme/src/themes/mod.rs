//! Built-in themes

mod spark;

pub use spark::{dark_colors, light_colors};
