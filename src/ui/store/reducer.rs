//! Pure reducer computing new state from the previous state and an action.

use crate::catalog::Product;

use super::{action::Action, state::State};

pub struct Reducer;

impl Reducer {
    pub fn new() -> Self {
        Self
    }

    /// Applies an action to the previous state and returns the new state.
    /// Every transition operates on a fresh clone so callers holding the
    /// previous state never observe partial updates.
    pub fn reduce(&self, prev_state: State, action: Action) -> State {
        match action {
            Action::AddToCart(product) => {
                let mut state = prev_state.clone();
                state.cart.push(product);
                state
            }
            Action::RemoveFromCart(product) => {
                let mut state = prev_state.clone();
                state.cart.retain(|item| item.name != product.name);
                state
            }
            Action::IncrementCount(product) => increment_count(prev_state, &product),
            Action::DecrementCount(product) => decrement_count(prev_state, &product),
            // marker action observed by the catalog loader - no state change
            Action::LoadItems => prev_state,
            Action::LoadSuccess(items) => {
                let mut state = prev_state.clone();
                state.items = items;
                state
            }
            Action::UpdateView(id) => {
                let mut state = prev_state.clone();
                state.view_id = id;
                state
            }
            Action::UpdateMessage(message) => {
                let mut state = prev_state.clone();
                state.message = message;
                state
            }
            Action::SetError(err) => {
                let mut state = prev_state.clone();
                state.error = err;
                state
            }
            Action::SetPendingRemoval(product) => {
                let mut state = prev_state.clone();
                state.pending_removal = product;
                state
            }
        }
    }
}

/// Bumps the count of cart lines matching the payload id and recomputes the
/// line price from the snapshotted unit price. Lines without a count or unit
/// price are left untouched.
fn increment_count(prev_state: State, payload: &Product) -> State {
    let mut state = prev_state.clone();

    state.cart = state
        .cart
        .into_iter()
        .map(|mut item| {
            if item.id == payload.id {
                if let (Some(count), Some(actual_price)) = (item.count, item.actual_price) {
                    let count = count + 1;
                    item.count = Some(count);
                    item.price = actual_price * f64::from(count);
                }
            }
            item
        })
        .collect();

    state
}

/// Drops the count of matching cart lines by one, saturating at zero, and
/// subtracts the unit price from the line price.
fn decrement_count(prev_state: State, payload: &Product) -> State {
    let mut state = prev_state.clone();

    state.cart = state
        .cart
        .into_iter()
        .map(|mut item| {
            if item.id == payload.id {
                if let (Some(count), Some(actual_price)) = (item.count, item.actual_price) {
                    item.count = Some(count.saturating_sub(1));
                    item.price -= actual_price;
                }
            }
            item
        })
        .collect();

    state
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
