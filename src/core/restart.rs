//! Detached relaunch of the shell after a crash.
//!
//! The launcher is started through a double fork: the first child becomes a
//! session leader and forks the process that execs the launcher, then exits.
//! The relaunched shell therefore belongs to neither the dialog's process nor
//! its session and survives the dialog exiting right after.

use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::ffi::{CStr, CString};
use std::io;

/// Relaunch `launcher` (looked up in `PATH`, no arguments) as a detached process.
///
/// Returns once the intermediate child has been reaped. Failures after the
/// first fork happen in the detached child and are reported on stderr there.
pub fn relaunch_detached(launcher: &str) -> Result<()> {
    let program = launcher_program(launcher)?;
    info!("Relaunching '{}' in a new session", launcher);

    // SAFETY: the child never returns into Rust code and only touches the
    // pre-built `program` string. setsid, fork and _exit are async-signal-safe;
    // execvp (PATH search) and perror are not, but run single-threaded in the
    // freshly forked child just as a C launcher would.
    match unsafe { libc::fork() } {
        -1 => Err(io::Error::last_os_error()).context("Failed to fork relaunch helper"),
        0 => detach_and_exec(&program),
        child => {
            reap(child);
            Ok(())
        }
    }
}

/// Validate and convert the launcher name for `execvp`.
pub fn launcher_program(launcher: &str) -> Result<CString> {
    if launcher.trim().is_empty() {
        bail!("Launcher command is empty");
    }

    CString::new(launcher)
        .with_context(|| format!("Launcher name '{}' contains a NUL byte", launcher.escape_debug()))
}

fn detach_and_exec(program: &CStr) -> ! {
    // SAFETY: runs in the freshly forked child; see relaunch_detached.
    unsafe {
        if libc::setsid() < 0 {
            libc::perror(c"setsid failed".as_ptr());
            libc::_exit(libc::EXIT_FAILURE);
        }

        match libc::fork() {
            -1 => {
                libc::perror(c"fork failed".as_ptr());
                libc::_exit(libc::EXIT_FAILURE);
            }
            0 => {}
            _ => libc::_exit(libc::EXIT_SUCCESS),
        }

        let argv = [program.as_ptr(), std::ptr::null()];
        libc::execvp(program.as_ptr(), argv.as_ptr());
        libc::perror(c"Failed to restart".as_ptr());
        libc::_exit(libc::EXIT_FAILURE)
    }
}

fn reap(child: libc::pid_t) {
    let mut status = 0;
    loop {
        // SAFETY: child is a pid we forked and have not waited on yet.
        let result = unsafe { libc::waitpid(child, &mut status, 0) };
        if result >= 0 {
            break;
        }

        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            warn!("Failed to reap relaunch helper {}: {}", child, err);
            break;
        }
    }

    if libc::WIFEXITED(status) && libc::WEXITSTATUS(status) != libc::EXIT_SUCCESS {
        warn!("Relaunch helper exited with status {}", libc::WEXITSTATUS(status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_launcher_names() {
        let program = launcher_program("hypryou-start").unwrap();
        assert_eq!(program.to_str().unwrap(), "hypryou-start");
    }

    #[test]
    fn rejects_empty_launcher() {
        assert!(launcher_program("").is_err());
        assert!(launcher_program("   ").is_err());
    }

    #[test]
    fn relaunch_returns_after_detaching() {
        relaunch_detached("true").unwrap();
    }

    #[test]
    fn missing_launcher_fails_in_the_detached_child_only() {
        relaunch_detached("hypryou-no-such-launcher").unwrap();
    }

    #[test]
    fn relaunch_rejects_empty_launcher() {
        assert!(relaunch_detached("").is_err());
    }

    #[test]
    fn rejects_nul_bytes() {
        let err = launcher_program("hypr\0you").unwrap_err();
        assert!(err.to_string().contains("NUL"));
    }
}
