//! Form Validation
//!
//! Field payloads and the closed error taxonomy for the two forms. Errors
//! stay local to the view that produced them: they are displayed inline,
//! never logged or escalated.

use thiserror::Error;

/// Validation failures a form can surface.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// One or more required fields were empty at submit time
    #[error("All fields are required.")]
    AllFieldsRequired,
    /// The two password fields differ
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Sign-in form fields, captured at submit time and discarded afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInFields {
    pub email: String,
    pub password: String,
}

impl SignInFields {
    /// Both fields must be non-empty.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::AllFieldsRequired);
        }
        Ok(())
    }
}

/// Registration form fields, captured at submit time and discarded afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub company_name: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationFields {
    /// The empty-field check runs before the password-match check; the first
    /// failing rule wins.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.company_name.is_empty()
            || self.full_name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::AllFieldsRequired);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{Session, View};

    fn filled_registration() -> RegistrationFields {
        RegistrationFields {
            company_name: "Acme Farms".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@acmefarms.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        }
    }

    #[test]
    fn sign_in_rejects_empty_email() {
        let fields = SignInFields {
            email: String::new(),
            password: "x".to_string(),
        };
        assert_eq!(fields.validate(), Err(FormError::AllFieldsRequired));
    }

    #[test]
    fn sign_in_rejects_empty_password() {
        let fields = SignInFields {
            email: "a@b.com".to_string(),
            password: String::new(),
        };
        assert_eq!(fields.validate(), Err(FormError::AllFieldsRequired));
    }

    #[test]
    fn sign_in_accepts_non_empty_fields() {
        let fields = SignInFields {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(fields.validate(), Ok(()));
    }

    #[test]
    fn registration_rejects_any_empty_field() {
        let clears: [fn(&mut RegistrationFields); 5] = [
            |f| f.company_name.clear(),
            |f| f.full_name.clear(),
            |f| f.email.clear(),
            |f| f.password.clear(),
            |f| f.confirm_password.clear(),
        ];
        for clear in clears {
            let mut fields = filled_registration();
            clear(&mut fields);
            assert_eq!(fields.validate(), Err(FormError::AllFieldsRequired));
        }
    }

    #[test]
    fn registration_rejects_mismatched_passwords() {
        let mut fields = filled_registration();
        fields.confirm_password = "different".to_string();
        assert_eq!(fields.validate(), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn empty_field_check_wins_over_mismatch() {
        let mut fields = filled_registration();
        fields.full_name.clear();
        fields.confirm_password = "different".to_string();
        assert_eq!(fields.validate(), Err(FormError::AllFieldsRequired));
    }

    #[test]
    fn registration_accepts_matching_passwords() {
        assert_eq!(filled_registration().validate(), Ok(()));
    }

    #[test]
    fn error_messages_match_display_strings() {
        assert_eq!(
            FormError::AllFieldsRequired.to_string(),
            "All fields are required."
        );
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }

    // Submit-flow scenarios: a failed validation leaves the session alone, a
    // successful one drives the matching transition.

    #[test]
    fn mismatched_passwords_block_registration() {
        let mut session = Session::new();
        session.navigate_to_register();

        let mut fields = filled_registration();
        fields.password = "p1".to_string();
        fields.confirm_password = "p2".to_string();
        assert_eq!(fields.validate(), Err(FormError::PasswordMismatch));
        assert_eq!(session.view, View::Register);
        assert_eq!(session.company_name, "");
    }

    #[test]
    fn valid_registration_lands_on_dashboard() {
        let mut session = Session::new();
        session.navigate_to_register();

        let fields = filled_registration();
        assert_eq!(fields.validate(), Ok(()));
        session.register_success(fields.company_name);
        assert_eq!(session.view, View::Dashboard);
        assert_eq!(session.company_name, "Acme Farms");
    }
}
