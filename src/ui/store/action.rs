//! Action types for state transitions.

use crate::catalog::Product;

use super::state::ViewID;

/// Commands that trigger state changes via the reducer. Each carries either
/// no payload or a single product, except `LoadSuccess` which carries the
/// fetched catalog.
#[derive(Debug, Clone)]
pub enum Action {
    AddToCart(Product),
    RemoveFromCart(Product),
    IncrementCount(Product),
    DecrementCount(Product),
    LoadItems,
    LoadSuccess(Vec<Product>),
    UpdateView(ViewID),
    UpdateMessage(Option<String>),
    SetError(Option<String>),
    SetPendingRemoval(Option<Product>),
}
