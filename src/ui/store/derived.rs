//! Selectors computing derived values from state.

use super::state::State;

/// Total price of everything in the cart.
pub fn get_cart_total(state: &State) -> f64 {
    state.cart.iter().map(|item| item.price).sum()
}

/// Number of lines in the cart.
pub fn get_cart_size(state: &State) -> usize {
    state.cart.len()
}

#[cfg(test)]
#[path = "./derived_tests.rs"]
mod tests;
