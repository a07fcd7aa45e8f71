//! Surfaces notices to the user.
//!
//! A notice becomes an auto-dismissing toast, stacked in the order notices
//! arrive, and is also appended to the activity log.

use dioxus::prelude::*;
use store::{Notice, NoticeLevel};

use crate::activity_log::{log_notice, use_activity_log};
use crate::components::{use_toast, ToastOptions};

/// Returns a callback that shows a notice. Needs a `ToastProvider` and an
/// `ActivityLog` context above the caller.
pub fn use_notifier() -> Callback<Notice> {
    let toast = use_toast();
    let mut log = use_activity_log();

    use_callback(move |notice: Notice| {
        log_notice(&mut log, &notice);
        match notice.level {
            NoticeLevel::Success => {
                toast.success(notice.message, ToastOptions::new());
            }
            NoticeLevel::Error => {
                toast.error(notice.message, ToastOptions::new());
            }
        }
    })
}
