//! Sign-In Page
//!
//! Credential form. There is no real authentication: any non-empty input is
//! accepted and a placeholder company name is reported upward.

use leptos::*;

use crate::components::{ErrorMessage, TextField};
use crate::state::{FormError, SignInFields};

/// Company name reported on every successful sign-in. Credential
/// verification is out of scope; the backendless demo always grants access.
const PLACEHOLDER_COMPANY: &str = "AgriFuture Inc.";

/// Sign-in form page
#[component]
pub fn SignIn(
    /// Invoked with the company name once the form passes validation
    #[prop(into)]
    on_login_success: Callback<String>,
    /// Invoked when the user follows the "Create one" link
    #[prop(into)]
    on_navigate_to_register: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<FormError>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let fields = SignInFields {
            email: email.get(),
            password: password.get(),
        };

        match fields.validate() {
            Err(e) => set_error.set(Some(e)),
            Ok(()) => {
                set_error.set(None);
                on_login_success.call(PLACEHOLDER_COMPANY.to_string());
            }
        }
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8">
            // Header
            <div class="text-center mb-6">
                <h1 class="text-2xl font-bold">"Welcome Back to PrecisionAg"</h1>
                <p class="text-gray-400 mt-1">
                    "Sign in to access your dashboard and manage your operations."
                </p>
            </div>

            <form on:submit=on_submit novalidate=true class="space-y-4">
                <ErrorMessage error=error />

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

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Sign In"
                </button>
            </form>

            // Footer
            <p class="text-center text-sm text-gray-400 mt-6">
                "Don't have an account? "
                <button
                    type="button"
                    on:click=move |_| on_navigate_to_register.call(())
                    class="text-primary-400 hover:text-primary-300 underline"
                >
                    "Create one"
                </button>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::PLACEHOLDER_COMPANY;
    use crate::state::{FormError, Session, SignInFields, View};

    #[test]
    fn empty_email_keeps_sign_in_view() {
        let session = Session::new();

        let fields = SignInFields {
            email: String::new(),
            password: "x".to_string(),
        };
        assert_eq!(fields.validate(), Err(FormError::AllFieldsRequired));
        assert_eq!(session.view, View::SignIn);
    }

    #[test]
    fn valid_credentials_grant_placeholder_company() {
        let fields = SignInFields {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(fields.validate(), Ok(()));

        let mut session = Session::new();
        session.login_success(PLACEHOLDER_COMPANY.to_string());
        assert_eq!(session.view, View::Dashboard);
        assert_eq!(session.company_name, "AgriFuture Inc.");
    }
}
