//! UI Components
//!
//! Reusable Leptos components for the forms and the dashboard.

pub mod field;
pub mod kpi_card;
pub mod toast;

pub use field::{ErrorMessage, TextField};
pub use kpi_card::KpiCard;
pub use toast::Toast;
