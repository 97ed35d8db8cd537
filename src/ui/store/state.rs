//! Application state definitions.

use core::fmt;

use crate::{catalog::Product, ui::colors::Colors};

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum ViewID {
    Main,
    Products,
    Cart,
}

impl fmt::Display for ViewID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Complete application state. `items` is the loaded catalog, `cart` the
/// lines the user intends to purchase. Everything else is UI chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub view_id: ViewID,
    pub items: Vec<Product>,
    pub cart: Vec<Product>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub pending_removal: Option<Product>,
    pub true_color_enabled: bool,
    pub colors: Colors,
}

impl Default for State {
    fn default() -> Self {
        Self {
            view_id: ViewID::Products,
            items: Vec::new(),
            cart: Vec::new(),
            message: None,
            error: None,
            pending_removal: None,
            true_color_enabled: false,
            colors: Colors::default(),
        }
    }
}
