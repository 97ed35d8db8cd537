use std::{cell::RefCell, sync::Arc};

use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::Rect,
    style::Style,
    widgets::{Paragraph, ScrollbarState, TableState, Widget},
};

use crate::{
    catalog::Product,
    ui::{
        components::{scrollbar::ScrollBar, table::Table},
        store::{
            action::Action,
            state::{State, ViewID},
            store::Store,
        },
    },
};

use super::traits::{CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View};

const HEADERS: [&str; 3] = ["Name", "Price", "In Cart"];
const COLUMN_SIZES: [usize; 3] = [40, 12, 10];

const LEGEND: &str = "(↑/↓) select | (Enter) add to cart | (r) remove from cart | (c) view cart";

/// The catalog screen: every loaded product with its unit price and how many
/// are already in the cart.
pub struct ProductsView {
    store: Arc<Store>,
    table_state: RefCell<TableState>,
    scroll_state: RefCell<ScrollbarState>,
}

impl ProductsView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            table_state: RefCell::new(TableState::default().with_selected(0)),
            scroll_state: RefCell::new(ScrollbarState::default()),
        }
    }

    fn next(&self, len: usize) {
        if len == 0 {
            return;
        }

        let i = match self.table_state.borrow().selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };

        self.table_state.borrow_mut().select(Some(i));
        let mut scroll_state = self.scroll_state.borrow_mut();
        *scroll_state = scroll_state.position(i);
    }

    fn previous(&self, len: usize) {
        if len == 0 {
            return;
        }

        let i = match self.table_state.borrow().selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };

        self.table_state.borrow_mut().select(Some(i));
        let mut scroll_state = self.scroll_state.borrow_mut();
        *scroll_state = scroll_state.position(i);
    }

    fn selected_product(&self, state: &State) -> Option<Product> {
        let selected = self.table_state.borrow().selected()?;
        state.items.get(selected).cloned()
    }

    fn add_to_cart(&self, product: &Product) {
        self.store.dispatch(Action::AddToCart(product.as_cart_line()));
        self.store.dispatch(Action::UpdateMessage(Some(
            "Product added to cart.".to_string(),
        )));
    }

    fn remove_from_cart(&self, product: &Product) {
        self.store.dispatch(Action::RemoveFromCart(product.clone()));
        self.store.dispatch(Action::UpdateMessage(Some(
            "Product removed from cart.".to_string(),
        )));
    }
}

impl View for ProductsView {
    fn id(&self) -> ViewID {
        ViewID::Products
    }

    fn legend(&self, _state: &State) -> &str {
        LEGEND
    }
}

impl CustomWidgetRef for ProductsView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        if ctx.state.items.is_empty() {
            let placeholder = Paragraph::new("No products loaded yet")
                .style(Style::new().fg(ctx.state.colors.row_fg));
            placeholder.render(area, buf);
            return;
        }

        let items = ctx
            .state
            .items
            .iter()
            .map(|product| table_row_from_product(product, &ctx.state))
            .collect::<Vec<Vec<String>>>();

        let headers = HEADERS
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<String>>();

        {
            let mut scroll_state = self.scroll_state.borrow_mut();
            *scroll_state = scroll_state.content_length(items.len());
        }

        let table = Table::new(items, headers, COLUMN_SIZES.to_vec());
        table.render(area, buf, &mut self.table_state.borrow_mut(), ctx);

        let scrollbar = ScrollBar::new();
        scrollbar.render(area, buf, &mut self.scroll_state.borrow_mut(), ctx);
    }
}

impl EventHandler for ProductsView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        self.next(ctx.state.items.len());
                        handled = true;
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        self.previous(ctx.state.items.len());
                        handled = true;
                    }
                    KeyCode::Enter | KeyCode::Char('a') => {
                        if let Some(product) = self.selected_product(&ctx.state) {
                            self.add_to_cart(&product);
                        }
                        handled = true;
                    }
                    KeyCode::Char('r') => {
                        if let Some(product) = self.selected_product(&ctx.state) {
                            self.remove_from_cart(&product);
                        }
                        handled = true;
                    }
                    KeyCode::Char('c') => {
                        self.store.dispatch(Action::UpdateView(ViewID::Cart));
                        handled = true;
                    }
                    _ => {}
                }
            }
        }

        handled
    }
}

fn table_row_from_product(product: &Product, state: &State) -> Vec<String> {
    let in_cart: u32 = state
        .cart
        .iter()
        .filter(|item| item.id == product.id)
        .map(|item| item.count.unwrap_or(0))
        .sum();

    let in_cart_label = if in_cart > 0 {
        format!("×{in_cart}")
    } else {
        String::new()
    };

    vec![
        product.name.clone(),
        format!("${:.2}", product.price),
        in_cart_label,
    ]
}
