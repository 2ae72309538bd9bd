pub mod keywords;
pub mod rule;
pub mod score;
pub mod validate;

pub use rule::*;
pub use score::*;
pub use validate::*;
