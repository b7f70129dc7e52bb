//! Display models built from command-line input before any widget exists.

use super::{buttons, exit_code, markup};
use crate::config::user::CrashConfig;

/// What the crash dialog tells the user about a terminated shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrashReport {
    pub code: i32,
    pub description: String,
}

impl CrashReport {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            description: exit_code::classify(code),
        }
    }

    /// Body text shown under the dialog title.
    pub fn body(&self, config: &CrashConfig) -> String {
        format!(
            "The UI crashed with exit code {}.\
             \nExit code description: {}\
             \nCrash logs are usually saved to {}.\
             \nFor opening terminal you can use {}.",
            self.code, self.description, config.crash_log_dir, config.terminal_shortcut
        )
    }
}

/// Sanitized content of a generic dialog.
///
/// `None` fields were not passed on the command line and produce no widget;
/// `Some("")` still produces one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogContent {
    pub app_title: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub buttons: Option<Vec<String>>,
}

impl DialogContent {
    pub fn new(
        app_title: Option<String>,
        title: Option<String>,
        raw_text: Option<&str>,
        raw_buttons: Option<&str>,
    ) -> Self {
        Self {
            app_title,
            title,
            text: raw_text.map(markup::strip_markup),
            buttons: raw_buttons.map(buttons::split_buttons),
        }
    }

    pub fn window_title<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.app_title.as_deref().unwrap_or(fallback)
    }
}
