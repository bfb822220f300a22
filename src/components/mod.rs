//! UI Components
//!
//! Reusable Leptos components for the admin shell.

mod charts;
mod form_field;
mod popup;
mod sidebar;
mod stat_card;
mod topbar;

pub use charts::{BarChart, DonutChart};
pub use form_field::FormField;
pub use popup::{Popup, PopupKind, PopupState};
pub use sidebar::Sidebar;
pub use stat_card::{fmt_count, fmt_money, ActionCard, StatCard};
pub use topbar::Topbar;
