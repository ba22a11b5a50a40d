pub mod product;
pub mod promotion;

pub use product::*;
pub use promotion::*;
