//! Pages
//!
//! Top-level page components, one per view.

pub mod dashboard;
pub mod register;
pub mod sign_in;

pub use dashboard::Dashboard;
pub use register::Register;
pub use sign_in::SignIn;
