pub mod action;
pub mod derived;
pub mod reducer;
pub mod state;
pub mod store;
