//! State Management
//!
//! Session state machine and form validation.

pub mod forms;
pub mod session;

pub use forms::{FormError, RegistrationFields, SignInFields};
pub use session::{Session, View};
