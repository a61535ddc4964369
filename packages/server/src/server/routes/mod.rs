// HTTP routes
pub mod health;
pub mod salons;

pub use health::*;
pub use salons::*;
