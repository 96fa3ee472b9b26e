//! Domain model types.
//!
//! - [`Point`] — an immutable 2-D city coordinate
//! - [`Tour`] — a closed visiting order over a fixed city list

mod point;
mod tour;

pub use point::Point;
pub use tour::Tour;
