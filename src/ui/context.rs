//! Application context threaded through dialog construction.
//!
//! Dialogs never reach for the toolkit's default display; the display comes
//! from the window being styled, and the application and configuration are
//! handed in explicitly.

use crate::config::css;
use crate::config::user::Config;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, CssProvider};
use std::rc::Rc;

/// Everything a dialog builder needs from its surroundings.
#[derive(Clone)]
pub struct DialogContext {
    pub app: Application,
    pub config: Rc<Config>,
}

impl DialogContext {
    pub fn new(app: &Application, config: Rc<Config>) -> Self {
        Self {
            app: app.clone(),
            config,
        }
    }

    /// Create a fixed-size dialog window owned by this application.
    pub fn new_window(&self, title: &str, height: i32) -> ApplicationWindow {
        let window = ApplicationWindow::builder()
            .application(&self.app)
            .title(title)
            .default_width(self.config.window.width)
            .default_height(height)
            .resizable(false)
            .build();
        window.add_css_class(css::DIALOG);
        window
    }

    /// Install the fallback stylesheet on the display `window` lives on.
    pub fn apply_stylesheet(&self, window: &ApplicationWindow) {
        let provider = CssProvider::new();
        provider.load_from_string(css::STYLESHEET);
        gtk4::style_context_add_provider_for_display(
            &WidgetExt::display(window),
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
