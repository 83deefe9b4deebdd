//! App Root Component
//!
//! Composition root: owns the session signal and dispatches the active view.
//! Child views never touch the session directly; they receive read-only data
//! and callback handles for the transitions they may request.

use leptos::*;

use crate::components::Toast;
use crate::pages::{Dashboard, Register, SignIn};
use crate::state::{Session, View};

/// How long the post-login notice stays on screen, in milliseconds.
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Single source of truth for navigation
    let session = create_rw_signal(Session::new());
    let notice = create_rw_signal(None::<String>);

    // Show a transient notice (auto-clears after timeout)
    let show_notice = move |message: String| {
        notice.set(Some(message));
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || notice.set(None))
            .forget();
    };

    let on_login_success = Callback::new(move |name: String| {
        show_notice(format!("Signed in to {}", name));
        session.update(|s| s.login_success(name));
    });

    let on_register_success = Callback::new(move |name: String| {
        show_notice(format!("Welcome, {}!", name));
        session.update(|s| s.register_success(name));
    });

    let on_logout = Callback::new(move |()| session.update(|s| s.logout()));
    let on_navigate_to_register =
        Callback::new(move |()| session.update(|s| s.navigate_to_register()));
    let on_navigate_to_sign_in =
        Callback::new(move |()| session.update(|s| s.navigate_to_sign_in()));

    let company_name = Signal::derive(move || session.get().company_name);

    view! {
        <main class="min-h-screen bg-gray-900 text-white">
            <div class="container mx-auto px-4 py-8">
                // Exactly one view is live at a time; adding a view means
                // extending the enum and this match.
                {move || match session.get().view {
                    View::SignIn => view! {
                        <SignIn
                            on_login_success=on_login_success
                            on_navigate_to_register=on_navigate_to_register
                        />
                    }.into_view(),
                    View::Register => view! {
                        <Register
                            on_register_success=on_register_success
                            on_navigate_to_sign_in=on_navigate_to_sign_in
                        />
                    }.into_view(),
                    View::Dashboard => view! {
                        <Dashboard company_name=company_name on_logout=on_logout />
                    }.into_view(),
                }}
            </div>

            // Transient success notices
            <Toast notice=notice.read_only() />
        </main>
    }
}
