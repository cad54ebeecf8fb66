//! Full-screen pages
//!
//! A page owns the layout and components of one screen, translates touches
//! into [`DashboardAction`](crate::state::DashboardAction)s and redraws
//! itself from the latest state.

pub mod dashboard;
pub mod page;

pub use dashboard::DashboardPage;
pub use page::Page;
