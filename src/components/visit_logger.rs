//! Visit Logger
//!
//! Renders nothing; records one visit when the page mounts. A failed report
//! is logged and otherwise ignored.

use leptos::prelude::*;

#[component]
pub fn VisitLogger() -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            if let Err(err) = crate::services::report_visit().await {
                web_sys::console::warn_1(&format!("Visit not logged: {}", err).into());
            }
        });
    });
}
