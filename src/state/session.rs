//! Session State
//!
//! In-memory view selector and company name. The composition root owns one
//! `Session` inside a signal and hands child views callbacks that run these
//! transitions; no view mutates the session directly.

/// The screen currently shown to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Credential form, the initial screen
    #[default]
    SignIn,
    /// Account creation form
    Register,
    /// Operations overview for the signed-in company
    Dashboard,
}

/// In-memory session: current view plus the signed-in company name.
///
/// `company_name` is non-empty exactly between a successful sign-in or
/// registration and the next logout. Nothing survives a page reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub view: View,
    pub company_name: String,
}

impl Session {
    /// Fresh session showing the sign-in screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful sign-in and switch to the dashboard.
    pub fn login_success(&mut self, name: String) {
        self.company_name = name;
        self.view = View::Dashboard;
    }

    /// Record a successful registration; same effect as a sign-in.
    pub fn register_success(&mut self, name: String) {
        self.login_success(name);
    }

    /// Clear the company name and return to the sign-in screen.
    pub fn logout(&mut self) {
        self.company_name.clear();
        self.view = View::SignIn;
    }

    /// Show the registration screen without touching the company name.
    pub fn navigate_to_register(&mut self) {
        self.view = View::Register;
    }

    /// Show the sign-in screen without touching the company name.
    pub fn navigate_to_sign_in(&mut self) {
        self.view = View::SignIn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_sign_in_with_no_company() {
        let session = Session::new();
        assert_eq!(session.view, View::SignIn);
        assert_eq!(session.company_name, "");
    }

    #[test]
    fn login_success_switches_to_dashboard() {
        let mut session = Session::new();
        session.login_success("AgriFuture Inc.".to_string());
        assert_eq!(session.view, View::Dashboard);
        assert_eq!(session.company_name, "AgriFuture Inc.");
    }

    #[test]
    fn register_success_propagates_name_verbatim() {
        let mut session = Session::new();
        session.navigate_to_register();
        session.register_success("Acme Farms".to_string());
        assert_eq!(session.view, View::Dashboard);
        assert_eq!(session.company_name, "Acme Farms");
    }

    #[test]
    fn logout_resets_from_any_state() {
        let mut from_dashboard = Session::new();
        from_dashboard.login_success("Acme".to_string());
        from_dashboard.logout();
        assert_eq!(from_dashboard, Session::new());

        let mut from_register = Session::new();
        from_register.navigate_to_register();
        from_register.logout();
        assert_eq!(from_register, Session::new());

        let mut from_sign_in = Session::new();
        from_sign_in.logout();
        assert_eq!(from_sign_in, Session::new());
    }

    #[test]
    fn navigation_does_not_touch_company_name() {
        let mut session = Session::new();
        session.login_success("Acme".to_string());
        session.navigate_to_register();
        assert_eq!(session.view, View::Register);
        assert_eq!(session.company_name, "Acme");

        session.navigate_to_sign_in();
        assert_eq!(session.view, View::SignIn);
        assert_eq!(session.company_name, "Acme");
    }
}
