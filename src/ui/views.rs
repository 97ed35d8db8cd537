pub mod cart;
pub mod main;
pub mod products;
pub mod traits;
