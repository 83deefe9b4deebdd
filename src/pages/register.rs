//! Registration Page
//!
//! Account creation form. The entered company name is propagated verbatim on
//! success, unlike sign-in's placeholder.

use leptos::*;

use crate::components::{ErrorMessage, TextField};
use crate::state::{FormError, RegistrationFields};

/// Registration form page
#[component]
pub fn Register(
    /// Invoked with the entered company name once the form passes validation
    #[prop(into)]
    on_register_success: Callback<String>,
    /// Invoked when the user follows the "Sign In" link
    #[prop(into)]
    on_navigate_to_sign_in: Callback<()>,
) -> impl IntoView {
    let (company_name, set_company_name) = create_signal(String::new());
    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<FormError>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let fields = RegistrationFields {
            company_name: company_name.get(),
            full_name: full_name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };

        match fields.validate() {
            Err(e) => set_error.set(Some(e)),
            Ok(()) => {
                set_error.set(None);
                web_sys::console::log_1(
                    &format!("Form submitted for {}", fields.company_name).into(),
                );
                on_register_success.call(fields.company_name);
            }
        }
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8">
            // Header
            <div class="text-center mb-6">
                <h1 class="text-2xl font-bold">"Create Your PrecisionAg Account"</h1>
                <p class="text-gray-400 mt-1">
                    "Join the future of farming. Gain access to real-time data and analytics for your fields."
                </p>
            </div>

            <form on:submit=on_submit novalidate=true class="space-y-4">
                <ErrorMessage error=error />

                <TextField
                    label="Company Name"
                    placeholder="e.g., AgriFuture Inc."
                    value=company_name
                    set_value=set_company_name
                />
                <TextField
                    label="Full Name"
                    placeholder="e.g., Jane Doe"
                    value=full_name
                    set_value=set_full_name
                />
                <TextField
                    label="Email Address"
                    input_type="email"
                    placeholder="you@company.com"
                    value=email
                    set_value=set_email
                />
                <TextField
                    label="Password"
                    input_type="password"
                    placeholder="••••••••"
                    value=password
                    set_value=set_password
                />
                <TextField
                    label="Confirm Password"
                    input_type="password"
                    placeholder="••••••••"
                    value=confirm_password
                    set_value=set_confirm_password
                />

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Create Account"
                </button>
            </form>

            // Footer
            <p class="text-center text-sm text-gray-400 mt-6">
                "Already have an account? "
                <button
                    type="button"
                    on:click=move |_| on_navigate_to_sign_in.call(())
                    class="text-primary-400 hover:text-primary-300 underline"
                >
                    "Sign In"
                </button>
            </p>
        </div>
    }
}
