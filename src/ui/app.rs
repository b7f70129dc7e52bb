//! Application setup and main loop for both dialogs.

use crate::cli::{CrashArgs, DialogArgs};
use crate::config::app_ids;
use crate::config::user::Config;
use crate::core::{CrashReport, DialogContent};
use crate::ui::context::DialogContext;
use crate::ui::dialogs::{crash, message};
use gtk4::prelude::*;
use gtk4::{gio, glib, Application};
use log::info;
use std::rc::Rc;

/// Show the crash dialog for `args.code` and run until it closes.
pub fn run_crash_dialog(args: CrashArgs) -> glib::ExitCode {
    let report = CrashReport::new(args.code);
    run_application(app_ids::CRASH, gio::ApplicationFlags::empty(), move |ctx| {
        crash::show_crash_dialog(ctx, &report);
    })
}

/// Show the generic dialog described by `args` and run until it closes.
pub fn run_message_dialog(args: DialogArgs) -> glib::ExitCode {
    let content = DialogContent::new(
        args.apptitle,
        args.title,
        args.text.as_deref(),
        args.buttons.as_deref(),
    );
    // Every invocation answers its own caller on stdout, so instances must
    // not be merged into one primary process.
    run_application(app_ids::DIALOG, gio::ApplicationFlags::NON_UNIQUE, move |ctx| {
        message::show_message_dialog(ctx, &content);
    })
}

fn run_application<F>(app_id: &str, flags: gio::ApplicationFlags, build: F) -> glib::ExitCode
where
    F: Fn(&DialogContext) + 'static,
{
    let config = Rc::new(Config::load());
    let app = Application::builder()
        .application_id(app_id)
        .flags(flags)
        .build();

    app.connect_activate(move |app| {
        info!("Activating {}", app_id_of(app));
        let ctx = DialogContext::new(app, Rc::clone(&config));
        build(&ctx);
    });

    // Options were already parsed by clap; GTK only gets the program name.
    let program = std::env::args().next().unwrap_or_else(|| app_id.to_string());
    app.run_with_args(&[program])
}

fn app_id_of(app: &Application) -> String {
    app.application_id()
        .map(|id| id.to_string())
        .unwrap_or_default()
}
