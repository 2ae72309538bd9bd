pub mod catalog;
pub mod error;
pub mod render;

pub use catalog::*;
pub use error::*;
pub use render::*;
