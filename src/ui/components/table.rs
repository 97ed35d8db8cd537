use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{
        Cell, HighlightSpacing, Row, StatefulWidget, Table as RatatuiTable, TableState,
    },
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

pub const COLUMN_MAX_WIDTH: u16 = 40;
const ELLIPSIS: &str = "…";

/// Generic selectable table used by the products and cart views. Callers own
/// the `TableState` so selection survives re-renders.
pub struct Table {
    headers: Vec<String>,
    items: Vec<Vec<String>>,
    column_sizes: Vec<usize>,
}

impl Table {
    pub fn new(items: Vec<Vec<String>>, headers: Vec<String>, column_sizes: Vec<usize>) -> Self {
        Self {
            headers,
            items,
            column_sizes,
        }
    }
}

impl CustomStatefulWidget for Table {
    type State = TableState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) {
        if area.width < 1 || area.height < 1 {
            return;
        }

        // keep the selection in range when items shrink
        if let Some(selected) = state.selected() {
            if !self.items.is_empty() && selected >= self.items.len() {
                state.select(Some(self.items.len() - 1));
            }
        }

        let header_style = Style::default()
            .fg(ctx.state.colors.header_fg)
            .bg(ctx.state.colors.header_bg)
            .add_modifier(Modifier::BOLD);

        let header = self
            .headers
            .iter()
            .map(|h| Cell::from(h.clone()))
            .collect::<Row>()
            .style(header_style)
            .height(1);

        let selected_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(ctx.state.colors.selected_row_fg);

        let rows = self.items.iter().map(|data| {
            let item = fit_to_width(data, &self.column_sizes);

            item.into_iter()
                .map(|content| Cell::from(content))
                .collect::<Row>()
                .style(
                    Style::new()
                        .fg(ctx.state.colors.row_fg)
                        .bg(ctx.state.colors.row_bg),
                )
                .height(1)
        });

        let widths = self
            .column_sizes
            .iter()
            .map(|_| Constraint::Max(COLUMN_MAX_WIDTH))
            .collect::<Vec<Constraint>>();

        let table = RatatuiTable::new(rows, widths)
            .header(header)
            .row_highlight_style(selected_style)
            .bg(ctx.state.colors.buffer_bg)
            .highlight_spacing(HighlightSpacing::Always);

        table.render(area, buf, state)
    }
}

fn fit_to_width(item: &[String], col_widths: &[usize]) -> Vec<String> {
    item.iter()
        .enumerate()
        .map(|(i, v)| {
            let col_width = col_widths[i];

            if v.width() < col_width {
                return v.clone();
            }

            // truncate on display width, char by char, since byte offsets
            // are not valid cut points for multibyte names
            let max_width = col_width - ELLIPSIS.width();
            let mut value = String::new();
            let mut used = 0;

            for c in v.chars() {
                let char_width = c.width().unwrap_or(0);
                if used + char_width > max_width {
                    break;
                }
                used += char_width;
                value.push(c);
            }

            value.push_str(ELLIPSIS);
            value
        })
        .collect::<Vec<String>>()
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::ui::{components::tests::buffer_text, store::state::State};

    use super::*;

    #[test]
    fn test_fit_to_width_truncates_long_values() {
        let row = vec!["Noise Cancelling Headphones".to_string(), "$199.99".to_string()];
        let fitted = fit_to_width(&row, &[10, 10]);

        assert_eq!(fitted[0], "Noise Can…");
        assert_eq!(fitted[1], "$199.99");
    }

    #[test]
    fn test_fit_to_width_truncates_multibyte_values() {
        let row = vec!["Café Érgonomique Déluxe".to_string(), "ééééééééééé".to_string()];
        let fitted = fit_to_width(&row, &[10, 10]);

        assert_eq!(fitted[0], "Café Érgo…");
        assert_eq!(fitted[1], "ééééééééé…");
    }

    #[test]
    fn test_fit_to_width_wide_chars_stay_within_column() {
        let row = vec!["ワイヤレスマウス".to_string()];
        let fitted = fit_to_width(&row, &[10]);

        // full-width chars count for two columns each
        assert_eq!(fitted[0], "ワイヤレ…");
        assert!(fitted[0].width() <= 10);
    }

    #[test]
    fn renders_table_with_headers_and_rows() {
        let table = Table::new(
            vec![
                vec!["Wireless Mouse".to_string(), "$24.99".to_string()],
                vec!["Desk Mat".to_string(), "$18.00".to_string()],
            ],
            vec!["Name".to_string(), "Price".to_string()],
            vec![30, 10],
        );

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let mut table_state = TableState::default().with_selected(0);
        let state = State::default();

        terminal
            .draw(|frame| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: frame.area(),
                };

                table.render(frame.area(), frame.buffer_mut(), &mut table_state, &ctx);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Name"));
        assert!(text.contains("Wireless Mouse"));
        assert!(text.contains("$18.00"));
    }

    #[test]
    fn clamps_selection_when_items_shrink() {
        let table = Table::new(
            vec![vec!["Desk Mat".to_string(), "$18.00".to_string()]],
            vec!["Name".to_string(), "Price".to_string()],
            vec![30, 10],
        );

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let mut table_state = TableState::default().with_selected(5);
        let state = State::default();

        terminal
            .draw(|frame| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: frame.area(),
                };

                table.render(frame.area(), frame.buffer_mut(), &mut table_state, &ctx);
            })
            .unwrap();

        assert_eq!(table_state.selected(), Some(0));
    }
}
