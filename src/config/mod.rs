//! Configuration and fixed constants shared by both dialogs.

pub mod user;

/// GTK application identifiers.
pub mod app_ids {
    pub const CRASH: &str = "com.koeqaife.hypryou.crashed";
    pub const DIALOG: &str = "com.koeqaife.hyprland-dialog";
}

/// CSS classes attached to dialog widgets.
pub mod css {
    pub const DIALOG: &str = "hypryou-dialog";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";

    /// Minimum style in case no GTK4 theme is set.
    pub const STYLESHEET: &str = ".title { font-size: 20px; font-weight: 400; }\
.description { font-size: 16px; font-weight: 300; }\
.hypryou-dialog { padding: 20px; }";
}

pub mod crash {
    pub const WINDOW_TITLE: &str = "HyprYou crashed...";
    pub const WINDOW_HEIGHT: i32 = 150;
    pub const RESTART_LABEL: &str = "Restart";
    pub const DISMISS_LABEL: &str = "OK";
}

pub mod dialog {
    pub const DEFAULT_APP_TITLE: &str = "Dialog";
    pub const WINDOW_HEIGHT: i32 = 1;
}
