//! Toast Notification Component
//!
//! Transient success notice shown after a sign-in or registration.

use leptos::*;

/// Toast notification container
#[component]
pub fn Toast(notice: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="fixed bottom-4 right-4 z-50">
            {move || {
                notice.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3
                                rounded-lg shadow-lg animate-slide-in">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
