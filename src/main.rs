use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use log::*;
use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use catalog::{CatalogClient, ProductSource};
use ui::{
    app,
    colors::Theme,
    store::{action::Action, store::Store},
};

mod catalog;
mod ui;

const DEFAULT_CATALOG: &str = "assets/products.json";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run in debug mode - Only prints logs foregoing UI
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Catalog source - a path to a JSON file or an http(s) URL
    #[arg(short, long, default_value = DEFAULT_CATALOG)]
    catalog: String,

    /// Color theme: Blue, Emerald, Indigo, or Red
    #[arg(short, long, default_value = "Blue")]
    theme: String,
}

fn initialize_logger(args: &Args) {
    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Off
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap();
}

/// Kicks off the one-shot catalog fetch on a background thread. The result
/// comes back into the store as either `LoadSuccess` or `SetError`.
fn load_catalog(source: Arc<dyn ProductSource>, store: Arc<Store>) -> JoinHandle<()> {
    store.dispatch(Action::LoadItems);
    store.dispatch(Action::UpdateMessage(Some(String::from(
        "Loading products…",
    ))));

    thread::spawn(move || match source.fetch() {
        Ok(products) => {
            debug!("catalog loaded: {} products", products.len());
            store.dispatch(Action::LoadSuccess(products));
            store.dispatch(Action::UpdateMessage(None));
        }
        Err(e) => {
            error!("catalog load failed: {e}");
            store.dispatch(Action::SetError(Some(e.to_string())));
            store.dispatch(Action::UpdateMessage(None));
        }
    })
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args);

    let store = Arc::new(Store::new(Theme::from_string(&args.theme)));

    store.subscribe(|state| {
        debug!(
            "state updated: view={} items={} cart={}",
            state.view_id,
            state.items.len(),
            state.cart.len()
        );
    });

    let client: Arc<dyn ProductSource> = Arc::new(CatalogClient::new(&args.catalog));
    let handle = load_catalog(client, Arc::clone(&store));

    if args.debug {
        handle
            .join()
            .map_err(|_| eyre!("catalog loader thread panicked"))?;
        return Ok(());
    }

    let application = app::create_app(store)?;
    application.launch()
}
