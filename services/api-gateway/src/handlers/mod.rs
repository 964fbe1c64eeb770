pub mod health;
pub mod products;
pub mod components;

pub use health::*;
pub use products::*;
pub use components::*;
