use ratatui::{crossterm::event::Event, layout::Rect};

use crate::ui::store::state::{State, ViewID};

/// Context handed to every widget render and event handler: the state
/// snapshot for this frame and the total app area for popover math.
pub struct CustomWidgetContext {
    pub state: State,
    pub app_area: Rect,
}

pub trait EventHandler {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool;
}

pub trait CustomWidget {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomWidgetRef {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

pub trait View: EventHandler + CustomWidgetRef {
    fn id(&self) -> ViewID;
    fn legend(&self, _state: &State) -> &str {
        ""
    }
}
