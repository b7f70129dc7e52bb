//! Crash report dialog with Restart and OK actions.

use crate::config::{crash, css};
use crate::core::{restart, CrashReport};
use crate::ui::context::DialogContext;
use crate::ui::{events, widgets};
use gtk4::prelude::*;
use gtk4::Justification;
use log::{error, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrashAction {
    Restart,
    Dismiss,
}

impl CrashAction {
    /// Buttons in presentation order.
    pub const BUTTONS: [(&'static str, CrashAction); 2] = [
        (crash::RESTART_LABEL, CrashAction::Restart),
        (crash::DISMISS_LABEL, CrashAction::Dismiss),
    ];
}

pub fn show_crash_dialog(ctx: &DialogContext, report: &CrashReport) {
    info!(
        "Showing crash dialog for exit code {} ({})",
        report.code, report.description
    );

    let window = ctx.new_window(crash::WINDOW_TITLE, crash::WINDOW_HEIGHT);
    let content = widgets::content_box();
    window.set_child(Some(&content));

    content.append(&widgets::text_label(
        crash::WINDOW_TITLE,
        css::TITLE,
        Justification::Center,
    ));
    content.append(&widgets::text_label(
        &report.body(&ctx.config.crash),
        css::DESCRIPTION,
        Justification::Left,
    ));

    let actions = widgets::action_row();
    content.append(&actions);

    let (tx, rx) = events::action_channel();
    for (label, action) in CrashAction::BUTTONS {
        let button = widgets::action_button(label);
        events::connect_action(&button, &tx, action);
        actions.append(&button);
    }

    let launcher = ctx.config.crash.launcher.clone();
    events::spawn_action_handler(&window, rx, move |action| match action {
        CrashAction::Restart => {
            info!("Restart requested");
            if let Err(e) = restart::relaunch_detached(&launcher) {
                error!("Failed to restart: {:#}", e);
            }
        }
        CrashAction::Dismiss => info!("Crash dialog dismissed"),
    });

    ctx.apply_stylesheet(&window);
    window.present();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_comes_before_ok() {
        let labels: Vec<&str> = CrashAction::BUTTONS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["Restart", "OK"]);
        assert_eq!(CrashAction::BUTTONS[0].1, CrashAction::Restart);
    }
}
