use std::{cell::RefCell, sync::Arc};

use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Paragraph, ScrollbarState, TableState, Widget},
};

use crate::{
    catalog::Product,
    ui::{
        components::{scrollbar::ScrollBar, table::Table},
        store::{
            action::Action,
            derived::get_cart_total,
            state::{State, ViewID},
            store::Store,
        },
    },
};

use super::traits::{CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View};

const HEADERS: [&str; 3] = ["Name", "Qty", "Price"];
const COLUMN_SIZES: [usize; 3] = [40, 6, 12];

const LEGEND: &str = "(↑/↓) select | (+/-) change quantity | (r) remove | (Esc) back to products";

/// The cart screen: one row per cart line with quantity controls and a
/// running total.
pub struct CartView {
    store: Arc<Store>,
    table_state: RefCell<TableState>,
    scroll_state: RefCell<ScrollbarState>,
}

impl CartView {
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

    fn selected_line(&self, state: &State) -> Option<Product> {
        let selected = self.table_state.borrow().selected()?;
        state.cart.get(selected).cloned()
    }

    fn decrement(&self, line: &Product) {
        // dropping below one item is destructive so it goes through the
        // confirmation dialog instead
        if line.count == Some(1) {
            self.store
                .dispatch(Action::SetPendingRemoval(Some(line.clone())));
        } else {
            self.store.dispatch(Action::DecrementCount(line.clone()));
        }
    }
}

impl View for CartView {
    fn id(&self) -> ViewID {
        ViewID::Cart
    }

    fn legend(&self, _state: &State) -> &str {
        LEGEND
    }
}

impl CustomWidgetRef for CartView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        if ctx.state.cart.is_empty() {
            let placeholder = Paragraph::new("Your cart is empty.")
                .style(Style::new().fg(ctx.state.colors.row_fg));
            placeholder.render(area, buf);
            return;
        }

        let [table_area, total_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(area);

        let items = ctx
            .state
            .cart
            .iter()
            .map(table_row_from_line)
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
        table.render(table_area, buf, &mut self.table_state.borrow_mut(), ctx);

        let scrollbar = ScrollBar::new();
        scrollbar.render(table_area, buf, &mut self.scroll_state.borrow_mut(), ctx);

        let total = Paragraph::new(format!("Total: ${:.2}", get_cart_total(&ctx.state)))
            .style(Style::new().fg(ctx.state.colors.label).bold())
            .right_aligned()
            .block(
                Block::bordered().border_style(Style::new().fg(ctx.state.colors.border_color)),
            );

        total.render(total_area, buf);
    }
}

impl EventHandler for CartView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        self.next(ctx.state.cart.len());
                        handled = true;
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        self.previous(ctx.state.cart.len());
                        handled = true;
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                        if let Some(line) = self.selected_line(&ctx.state) {
                            self.store.dispatch(Action::IncrementCount(line));
                        }
                        handled = true;
                    }
                    KeyCode::Char('-') | KeyCode::Left => {
                        if let Some(line) = self.selected_line(&ctx.state) {
                            self.decrement(&line);
                        }
                        handled = true;
                    }
                    KeyCode::Char('r') => {
                        if let Some(line) = self.selected_line(&ctx.state) {
                            self.store.dispatch(Action::SetPendingRemoval(Some(line)));
                        }
                        handled = true;
                    }
                    KeyCode::Esc | KeyCode::Char('s') => {
                        self.store.dispatch(Action::UpdateView(ViewID::Products));
                        handled = true;
                    }
                    _ => {}
                }
            }
        }

        handled
    }
}

fn table_row_from_line(line: &Product) -> Vec<String> {
    vec![
        line.name.clone(),
        line.count.unwrap_or(0).to_string(),
        format!("${:.2}", line.price),
    ]
}
