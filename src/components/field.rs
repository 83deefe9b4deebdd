//! Form Field Components
//!
//! Labeled text input and inline error display shared by the sign-in and
//! registration forms.

use leptos::*;

use crate::state::FormError;

/// Labeled text input wired to a signal pair
#[component]
pub fn TextField(
    /// Visible label above the input
    label: &'static str,
    /// HTML input type
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value
    value: ReadSignal<String>,
    /// Setter invoked on every input event
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Validation error shown above the form fields, hidden while `None`
#[component]
pub fn ErrorMessage(error: ReadSignal<Option<FormError>>) -> impl IntoView {
    view! {
        {move || {
            error.get().map(|e| view! {
                <p class="bg-red-900 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-2">
                    {e.to_string()}
                </p>
            })
        }}
    }
}
