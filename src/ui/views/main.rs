use std::{collections::HashMap, rc::Rc, sync::Arc};

use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{palette::tailwind, Style},
    text::Line,
    widgets::{Block, BorderType, Clear as ClearWidget, Padding, Paragraph, Widget, WidgetRef},
};

use crate::ui::{
    components::{footer::InfoFooter, header::Header, popover::get_popover_area},
    store::{
        action::Action,
        derived::get_cart_size,
        state::{State, ViewID},
        store::Store,
    },
};

use super::{
    cart::CartView,
    products::ProductsView,
    traits::{CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View},
};

const DEFAULT_PADDING: Padding = Padding::horizontal(2);

pub struct MainView {
    store: Arc<Store>,
    sub_views: HashMap<ViewID, Box<dyn View>>,
}

impl MainView {
    pub fn new(store: Arc<Store>) -> Self {
        let mut sub_views: HashMap<ViewID, Box<dyn View>> = HashMap::new();

        let products = Box::new(ProductsView::new(Arc::clone(&store)));
        let cart = Box::new(CartView::new(Arc::clone(&store)));

        sub_views.insert(products.id(), products);
        sub_views.insert(cart.id(), cart);

        Self { store, sub_views }
    }

    fn render_buffer_bg(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &State) {
        let block = Block::new()
            .style(Style::new().bg(state.colors.buffer_bg))
            .padding(DEFAULT_PADDING);
        block.render(area, buf);
    }

    fn get_top_section_areas(&self, area: Rect) -> Rc<[Rect]> {
        Layout::horizontal([
            Constraint::Percentage(20),
            Constraint::Percentage(100),
            Constraint::Percentage(20),
        ])
        .split(area)
    }

    fn render_top(
        &self,
        sections: Rc<[Rect]>,
        buf: &mut ratatui::prelude::Buffer,
        message: Option<String>,
        ctx: &CustomWidgetContext,
    ) {
        let logo =
            Paragraph::new("\ncart-term").style(Style::new().fg(ctx.state.colors.border_color));
        let logo_block: Block<'_> = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Double)
            .padding(DEFAULT_PADDING);
        let logo_inner_area = logo_block.inner(sections[0]);

        logo_block.render(sections[0], buf);
        logo.render_ref(logo_inner_area, buf);

        if let Some(message) = message {
            let message_block = Block::default().padding(Padding::uniform(2));
            let message_inner_area = message_block.inner(sections[1]);
            let m = Header::new(format!("\n\n{message}"));
            message_block.render(sections[1], buf);
            m.render(message_inner_area, buf, ctx);
        }

        let cart_info = Paragraph::new(format!("\nCart: {}", get_cart_size(&ctx.state)))
            .style(Style::new().fg(ctx.state.colors.border_color));
        let cart_info_block = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Double)
            .padding(DEFAULT_PADDING);
        let cart_info_inner_area = cart_info_block.inner(sections[2]);

        cart_info_block.render(sections[2], buf);
        cart_info.render_ref(cart_info_inner_area, buf);
    }

    fn render_middle_view(
        &self,
        view: &Box<dyn View>,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let block: Block<'_> = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Plain)
            .padding(DEFAULT_PADDING);
        let inner_area = block.inner(area);
        block.render(area, buf);
        view.render_ref(inner_area, buf, ctx);
    }

    fn render_confirm_popover(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &State) {
        if let Some(pending) = &state.pending_removal {
            let block = Block::bordered()
                .border_type(BorderType::Double)
                .border_style(
                    Style::new()
                        .fg(state.colors.border_color)
                        .bg(state.colors.buffer_bg),
                )
                .padding(Padding::uniform(2))
                .style(Style::default().bg(state.colors.buffer_bg));
            let inner_area = block.inner(area);
            let [msg_area, item_area, choice_area] = Layout::vertical([
                Constraint::Percentage(100),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner_area);

            let message =
                Line::from("Are you sure you want to remove the item from cart?");
            let item = Line::from(pending.name.as_str()).centered();
            let choices = Paragraph::new("(y) remove | (n) keep").centered();

            ClearWidget.render(area, buf);
            block.render(area, buf);
            message.render(msg_area, buf);
            item.render(item_area, buf);
            choices.render(choice_area, buf);
        }
    }

    fn render_error_popover(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &State) {
        if state.error.is_some() {
            let msg = state.error.clone().unwrap();
            let block = Block::bordered()
                .border_type(BorderType::Double)
                .border_style(
                    Style::new()
                        .fg(tailwind::RED.c600)
                        .bg(state.colors.buffer_bg),
                )
                .padding(Padding::uniform(2))
                .style(Style::default().bg(state.colors.buffer_bg));
            let inner_area = block.inner(area);
            let [msg_area, exit_area] = Layout::vertical([
                Constraint::Percentage(100), // msg
                Constraint::Length(1),       // exit
            ])
            .areas(inner_area);

            let message = Line::from(format!("Error: {}", msg));
            let exit = Paragraph::new("Press enter to clear error").centered();
            ClearWidget.render(area, buf);
            block.render(area, buf);
            message.render(msg_area, buf);
            exit.render(exit_area, buf);
        }
    }

    fn render_footer(
        &self,
        legend: &str,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let mut info = String::from("(q) quit");

        if !legend.is_empty() {
            info = format!("{info} | {legend}");
        }

        let footer = InfoFooter::new(info);
        footer.render(area, buf, ctx);
    }

    fn confirm_removal(&self, pending: &crate::catalog::Product) {
        self.store
            .dispatch(Action::RemoveFromCart(pending.clone()));
        self.store.dispatch(Action::SetPendingRemoval(None));
        self.store.dispatch(Action::UpdateMessage(Some(
            "Product removed from cart.".to_string(),
        )));
    }
}

impl View for MainView {
    fn id(&self) -> ViewID {
        ViewID::Main
    }
}

impl CustomWidgetRef for MainView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        // consists of 3 vertical rectangles (top, middle, bottom)
        let page_areas = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

        let view_id = ctx.state.view_id.clone();
        let view = self.sub_views.get(&view_id).unwrap();
        let legend = view.legend(&ctx.state);

        // render background for entire display
        self.render_buffer_bg(area, buf, &ctx.state);
        // logo, toast message, cart size
        let top_section_areas = self.get_top_section_areas(page_areas[0]);
        self.render_top(top_section_areas, buf, ctx.state.message.clone(), ctx);
        // view
        self.render_middle_view(view, page_areas[1], buf, ctx);
        // legend for current view
        self.render_footer(legend, page_areas[2], buf, ctx);

        // popovers render last so they layer on top
        self.render_confirm_popover(get_popover_area(area, 60, 40), buf, &ctx.state);
        self.render_error_popover(get_popover_area(area, 50, 40), buf, &ctx.state);
    }
}

impl EventHandler for MainView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        if let Some(pending) = &ctx.state.pending_removal {
            if let Event::Key(key) = evt {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Enter => {
                            self.confirm_removal(pending);
                        }
                        KeyCode::Char('n') | KeyCode::Esc => {
                            self.store.dispatch(Action::SetPendingRemoval(None));
                        }
                        _ => {}
                    }
                }
            }
            return true;
        }

        if ctx.state.error.is_some() {
            if let Event::Key(key) = evt {
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Enter {
                    self.store.dispatch(Action::SetError(None));
                }
            }
            return true;
        }

        let view_id = ctx.state.view_id.clone();
        let view = self.sub_views.get(&view_id).unwrap();
        view.process_event(evt, ctx)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{
        backend::TestBackend,
        crossterm::event::{KeyEvent, KeyModifiers},
        Terminal,
    };

    use crate::{
        catalog::Product,
        ui::{colors::Theme, components::tests::buffer_text},
    };

    use super::*;

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image: format!("{id}.png"),
            count: None,
            actual_price: None,
        }
    }

    fn setup() -> (MainView, Arc<Store>) {
        let store = Arc::new(Store::new(Theme::Blue));
        store.dispatch(Action::LoadSuccess(vec![
            product("1", "Wireless Mouse", 24.99),
            product("2", "Desk Mat", 18.0),
        ]));
        (MainView::new(Arc::clone(&store)), store)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctx_from(store: &Store) -> CustomWidgetContext {
        CustomWidgetContext {
            state: store.get_state(),
            app_area: Rect::new(0, 0, 80, 24),
        }
    }

    fn draw(view: &MainView, store: &Store) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal
            .draw(|frame| {
                let ctx = CustomWidgetContext {
                    state: store.get_state(),
                    app_area: frame.area(),
                };

                view.render_ref(frame.area(), frame.buffer_mut(), &ctx);
            })
            .unwrap();

        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_products_view_with_chrome() {
        let (main_view, store) = setup();

        let text = draw(&main_view, &store);

        assert!(text.contains("cart-term"));
        assert!(text.contains("Cart: 0"));
        assert!(text.contains("Wireless Mouse"));
        assert!(text.contains("(q) quit"));
    }

    #[test]
    fn test_renders_toast_message() {
        let (main_view, store) = setup();
        store.dispatch(Action::UpdateMessage(Some(
            "Product added to cart.".to_string(),
        )));

        let text = draw(&main_view, &store);

        assert!(text.contains("Product added to cart."));
    }

    #[test]
    fn test_renders_confirmation_popover() {
        let (main_view, store) = setup();
        store.dispatch(Action::SetPendingRemoval(Some(product(
            "1",
            "Wireless Mouse",
            24.99,
        ))));

        let text = draw(&main_view, &store);

        assert!(text.contains("Are you sure you want to remove the item from cart?"));
        assert!(text.contains("(y) remove | (n) keep"));
    }

    #[test]
    fn test_renders_error_popover() {
        let (main_view, store) = setup();
        store.dispatch(Action::SetError(Some("catalog unreachable".to_string())));

        let text = draw(&main_view, &store);

        assert!(text.contains("Error: catalog unreachable"));
        assert!(text.contains("Press enter to clear error"));
    }

    #[test]
    fn test_confirming_removal_drops_cart_line() {
        let (main_view, store) = setup();
        let line = product("1", "Wireless Mouse", 24.99).as_cart_line();
        store.dispatch(Action::AddToCart(line.clone()));
        store.dispatch(Action::SetPendingRemoval(Some(line)));

        let handled = main_view.process_event(&key(KeyCode::Char('y')), &ctx_from(&store));

        assert!(handled);
        let state = store.get_state();
        assert!(state.cart.is_empty());
        assert!(state.pending_removal.is_none());
        assert_eq!(state.message.as_deref(), Some("Product removed from cart."));
    }

    #[test]
    fn test_declining_removal_keeps_cart_line() {
        let (main_view, store) = setup();
        let line = product("1", "Wireless Mouse", 24.99).as_cart_line();
        store.dispatch(Action::AddToCart(line.clone()));
        store.dispatch(Action::SetPendingRemoval(Some(line)));

        main_view.process_event(&key(KeyCode::Char('n')), &ctx_from(&store));

        let state = store.get_state();
        assert_eq!(state.cart.len(), 1);
        assert!(state.pending_removal.is_none());
    }

    #[test]
    fn test_enter_clears_error() {
        let (main_view, store) = setup();
        store.dispatch(Action::SetError(Some("catalog unreachable".to_string())));

        let handled = main_view.process_event(&key(KeyCode::Enter), &ctx_from(&store));

        assert!(handled);
        assert!(store.get_state().error.is_none());
    }

    #[test]
    fn test_delegates_events_to_focused_view() {
        let (main_view, store) = setup();

        main_view.process_event(&key(KeyCode::Char('c')), &ctx_from(&store));
        assert_eq!(store.get_state().view_id, ViewID::Cart);

        main_view.process_event(&key(KeyCode::Esc), &ctx_from(&store));
        assert_eq!(store.get_state().view_id, ViewID::Products);
    }
}
