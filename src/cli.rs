//! Command-line options for both dialog binaries.

use clap::error::ErrorKind;
use clap::Parser;
use gtk4::glib;

/// Show why the HyprYou shell crashed and offer to restart it.
#[derive(Debug, Parser)]
#[command(name = "crash-dialog", version)]
pub struct CrashArgs {
    /// Exit code to display
    #[arg(short, long, value_name = "CODE", default_value_t = -1, allow_negative_numbers = true)]
    pub code: i32,
}

/// Show a dialog and print the label of the clicked button.
#[derive(Debug, Parser)]
#[command(name = "hyprland-dialog", version)]
pub struct DialogArgs {
    /// Dialog title
    #[arg(short, long, value_name = "TITLE", allow_hyphen_values = true)]
    pub title: Option<String>,

    /// App title
    #[arg(short = 'p', long, value_name = "APPTITLE", allow_hyphen_values = true)]
    pub apptitle: Option<String>,

    /// Dialog text
    #[arg(short = 'x', long, value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Dialog buttons, separated by ';'
    #[arg(short, long, value_name = "BUTTONS", allow_hyphen_values = true)]
    pub buttons: Option<String>,
}

/// Parse `args`, printing parse failures to stderr.
///
/// Help and version requests exit the process with status 0 through clap.
pub fn parse_from<T, I, S>(args: I) -> Result<T, glib::ExitCode>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    T::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            eprintln!("Failed to parse options: {}", e);
            glib::ExitCode::FAILURE
        }
    })
}

/// Parse the process arguments.
pub fn parse_or_exit<T: Parser>() -> Result<T, glib::ExitCode> {
    parse_from(std::env::args_os())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crash_code_defaults_to_minus_one() {
        let args: CrashArgs = parse_from(["crash-dialog"]).unwrap();
        assert_eq!(args.code, -1);
    }

    #[test]
    fn crash_code_accepts_short_long_and_negative() {
        let args: CrashArgs = parse_from(["crash-dialog", "-c", "139"]).unwrap();
        assert_eq!(args.code, 139);

        let args: CrashArgs = parse_from(["crash-dialog", "--code", "-2"]).unwrap();
        assert_eq!(args.code, -2);

        let args: CrashArgs = parse_from(["crash-dialog", "--code=1"]).unwrap();
        assert_eq!(args.code, 1);
    }

    #[test]
    fn crash_code_rejects_garbage() {
        assert!(parse_from::<CrashArgs, _, _>(["crash-dialog", "--code", "abc"]).is_err());
        assert!(parse_from::<CrashArgs, _, _>(["crash-dialog", "--bogus"]).is_err());
    }

    #[test]
    fn dialog_options() {
        let args: DialogArgs = parse_from([
            "hyprland-dialog",
            "-t",
            "Title",
            "-p",
            "App",
            "-x",
            "Body<br>text",
            "-b",
            "OK;Cancel",
        ])
        .unwrap();

        assert_eq!(args.title.as_deref(), Some("Title"));
        assert_eq!(args.apptitle.as_deref(), Some("App"));
        assert_eq!(args.text.as_deref(), Some("Body<br>text"));
        assert_eq!(args.buttons.as_deref(), Some("OK;Cancel"));
    }

    #[test]
    fn titles_may_start_with_a_dash() {
        let args: DialogArgs =
            parse_from(["hyprland-dialog", "--title", "-1 file left", "-p", "--x"]).unwrap();
        assert_eq!(args.title.as_deref(), Some("-1 file left"));
        assert_eq!(args.apptitle.as_deref(), Some("--x"));
    }

    #[test]
    fn dialog_options_are_optional() {
        let args: DialogArgs = parse_from(["hyprland-dialog", "--buttons", ""]).unwrap();
        assert!(args.title.is_none());
        assert!(args.text.is_none());
        assert_eq!(args.buttons.as_deref(), Some(""));
    }
}
