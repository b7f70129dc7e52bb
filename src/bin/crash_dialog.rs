use gtk4::glib;
use hypryou_dialogs::cli::{self, CrashArgs};
use hypryou_dialogs::{logging, ui};

fn main() -> glib::ExitCode {
    logging::init();

    let args = match cli::parse_or_exit::<CrashArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    ui::app::run_crash_dialog(args)
}
