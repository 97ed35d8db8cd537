//! Redux-like state container shared between the UI and the loader thread.

use std::sync::Mutex;

use crate::ui::colors::{self, Colors, Theme};

use super::{action::Action, reducer::Reducer, state::State};

type Subscriber = Box<dyn Fn(&State) + Send>;

/// Manages the state of our application. Owned by the application root and
/// shared by `Arc`; dispatches are serialized through the internal lock.
pub struct Store {
    state: Mutex<State>,
    reducer: Reducer,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl Store {
    pub fn new(theme: Theme) -> Self {
        let true_color_enabled = colors::true_color_enabled();
        let palette = theme.to_palette(true_color_enabled);

        Self {
            reducer: Reducer::new(),
            state: Mutex::new(State {
                true_color_enabled,
                colors: Colors::new(palette, true_color_enabled),
                ..State::default()
            }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn dispatch(&self, action: Action) {
        let new_state = {
            let mut prev_state = self.state.lock().unwrap();
            let new_state = self.reducer.reduce(prev_state.clone(), action);
            *prev_state = new_state.clone();
            new_state
        };

        for subscriber in self.subscribers.lock().unwrap().iter() {
            subscriber(&new_state);
        }
    }

    pub fn get_state(&self) -> State {
        self.state.lock().unwrap().clone()
    }

    /// Registers a callback invoked with the new state after every dispatch.
    pub fn subscribe<F: Fn(&State) + Send + 'static>(&self, f: F) {
        self.subscribers.lock().unwrap().push(Box::new(f));
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
