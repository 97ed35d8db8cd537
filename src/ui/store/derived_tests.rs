use crate::catalog::Product;
use crate::ui::store::state::State;

use super::{get_cart_size, get_cart_total};

fn cart_line(id: &str, name: &str, count: u32, price: f64, actual_price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: format!("{id}.png"),
        count: Some(count),
        actual_price: Some(actual_price),
    }
}

#[test]
fn test_cart_total_empty() {
    let state = State::default();
    assert_eq!(get_cart_total(&state), 0.0);
}

#[test]
fn test_cart_total_sums_line_prices() {
    let mut state = State::default();
    state.cart = vec![
        cart_line("1", "Wireless Mouse", 2, 49.5, 24.75),
        cart_line("2", "Desk Mat", 1, 18.0, 18.0),
    ];

    assert_eq!(get_cart_total(&state), 67.5);
}

#[test]
fn test_cart_size() {
    let mut state = State::default();
    assert_eq!(get_cart_size(&state), 0);

    state.cart = vec![cart_line("1", "Wireless Mouse", 2, 49.98, 24.99)];
    assert_eq!(get_cart_size(&state), 1);
}
