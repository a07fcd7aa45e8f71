//! This crate contains all UI for the roster client.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

pub mod activity_log;
pub use activity_log::{ActivityLog, LogEntry, log_notice, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod notifier;
pub use notifier::use_notifier;

mod user_editor;
pub use user_editor::UserEditor;

mod user_table;
pub use user_table::UserTable;

mod pager;
pub use pager::Pager;
