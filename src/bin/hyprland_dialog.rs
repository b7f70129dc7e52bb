use gtk4::glib;
use hypryou_dialogs::cli::{self, DialogArgs};
use hypryou_dialogs::{logging, ui};

fn main() -> glib::ExitCode {
    logging::init();

    let args = match cli::parse_or_exit::<DialogArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    ui::app::run_message_dialog(args)
}
