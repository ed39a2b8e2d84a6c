//! Shared UI state containers.
//!
//! Each container owns one piece of state behind a `watch` channel: a single
//! writer applies pure transitions from `dashboard_common`, and any number of
//! readers observe the latest value.

mod navigation;
mod theme;

pub use navigation::{MonthStep, NavigationContext, NavigationSnapshot, NavigationState};
pub use theme::ThemeContext;
