pub mod app;
pub mod colors;
pub mod components;
pub mod store;
pub mod views;
