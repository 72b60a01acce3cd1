//! Kaiten API model types.

mod space;

pub use space::*;
