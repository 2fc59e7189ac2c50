#![allow(warnings)]
//! Barangay Map Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod device;
mod map;
mod models;
mod services;
mod store;

fn main() {
    console_error_panic_hook::set_once();

    // Composition root: the store client is built here and injected, so
    // everything below it can run against a substitute.
    #[cfg(target_arch = "wasm32")]
    {
        use std::rc::Rc;

        use leptos::prelude::*;

        use app::App;
        use services::{PinStore, RestPinStore};

        let client: Rc<dyn PinStore> =
            Rc::new(RestPinStore::new(config::store_url(), config::store_key()));
        mount_to_body(move || view! { <App client=client.clone() /> });
    }
}
