//! PrecisionAg Dashboard
//!
//! Mock operations dashboard for an agriculture-management product, built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Sign-in and registration forms with local validation
//! - Operations dashboard with KPI, farm, and crop overviews
//! - In-memory view switching (no URL routing)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: sign-in and registration only flip the
//! in-memory session state, and the dashboard renders fixed mock records.

use leptos::*;
use wasm_bindgen::JsCast;

mod app;
mod components;
mod data;
mod pages;
mod state;

/// Logical id of the display surface the app attaches to.
const ROOT_ELEMENT_ID: &str = "root";

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // The mount point is a startup precondition; there is nothing to render
    // without it.
    let root = document()
        .get_element_by_id(ROOT_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(el) => mount_to(el, || view! { <app::App /> }),
        None => {
            web_sys::console::error_1(
                &format!("Mount point #{} not found", ROOT_ELEMENT_ID).into(),
            );
            panic!("mount point #{} not found", ROOT_ELEMENT_ID);
        }
    }
}
