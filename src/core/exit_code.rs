//! Exit code classification for the crash dialog.
//!
//! Exit codes above 128 conventionally mean "terminated by signal N" where
//! `N = code - 128`. The shell supervisor additionally reserves a few codes
//! from the real-time signal band to report its own failure modes, so those
//! have to be recognised before falling back to the platform signal table.

use std::ffi::CStr;

/// Offset added to a signal number to form a "killed by signal" exit code.
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// Application-reserved exit codes derived from `SIGRTMIN`.
///
/// These sit inside the real-time band, above every standard signal, so they
/// never collide with a genuine `128 + SIGxxx` code for a standard signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservedCode {
    InternalError,
    Hung,
    Reload,
}

impl ReservedCode {
    pub const ALL: [ReservedCode; 3] = [Self::InternalError, Self::Hung, Self::Reload];

    fn rt_offset(self) -> i32 {
        match self {
            Self::InternalError => 1,
            Self::Hung => 2,
            Self::Reload => 3,
        }
    }

    /// Numeric exit code for this sentinel on the running platform.
    pub fn code(self) -> i32 {
        libc::SIGRTMIN() + self.rt_offset() + SIGNAL_EXIT_BASE
    }

    /// Reverse lookup of a sentinel from an exit code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|reserved| reserved.code() == code)
    }
}

/// Describe why a process terminated with `code`.
pub fn classify(code: i32) -> String {
    if let Some(name) = signal_name_for_exit_code(code) {
        return name;
    }

    let description = match ReservedCode::from_code(code) {
        Some(ReservedCode::InternalError) => "Internal error",
        Some(ReservedCode::Hung) => "Loop went to lunch. Never came back...",
        _ if code == 1 => "Internal error",
        _ if code == -2 => "Watchdog error",
        _ => "Unknown",
    };

    description.to_string()
}

/// Signal number encoded in `code`, if it is a signal exit outside the reserved band.
pub fn signal_number(code: i32) -> Option<i32> {
    if ReservedCode::from_code(code).is_some() {
        return None;
    }

    let signal = code.checked_sub(SIGNAL_EXIT_BASE)?;
    (1..=libc::SIGRTMAX()).contains(&signal).then_some(signal)
}

fn signal_name_for_exit_code(code: i32) -> Option<String> {
    signal_number(code).and_then(signal_description)
}

/// Platform description of `signal`, as reported by `strsignal(3)`.
pub fn signal_description(signal: i32) -> Option<String> {
    // SAFETY: strsignal returns either NULL or a pointer to a NUL-terminated
    // string owned by libc that stays valid until the next call on this thread.
    // It is copied out before returning.
    let ptr = unsafe { libc::strsignal(signal) };
    if ptr.is_null() {
        return None;
    }

    let description = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    (!description.is_empty()).then_some(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_signals_use_platform_names() {
        for signal in [libc::SIGSEGV, libc::SIGKILL, libc::SIGTERM, libc::SIGABRT] {
            let code = SIGNAL_EXIT_BASE + signal;
            assert_eq!(Some(classify(code)), signal_description(signal));
        }
    }

    #[test]
    fn signal_range_matches_platform_table() {
        let reserved: Vec<i32> = ReservedCode::ALL.iter().map(|r| r.code()).collect();

        for code in SIGNAL_EXIT_BASE..=SIGNAL_EXIT_BASE + 64 {
            if reserved.contains(&code) {
                continue;
            }
            let signal = code - SIGNAL_EXIT_BASE;
            if signal < 1 || signal > libc::SIGRTMAX() {
                continue;
            }
            if let Some(name) = signal_description(signal) {
                assert_eq!(classify(code), name, "exit code {code}");
            }
        }
    }

    #[test]
    fn internal_error_codes() {
        assert_eq!(classify(1), "Internal error");
        assert_eq!(classify(ReservedCode::InternalError.code()), "Internal error");
    }

    #[test]
    fn hung_code() {
        assert_eq!(
            classify(ReservedCode::Hung.code()),
            "Loop went to lunch. Never came back..."
        );
    }

    #[test]
    fn watchdog_and_fallbacks() {
        assert_eq!(classify(-2), "Watchdog error");
        assert_eq!(classify(-1), "Unknown");
        assert_eq!(classify(0), "Unknown");
        assert_eq!(classify(SIGNAL_EXIT_BASE), "Unknown");
        assert_eq!(classify(999_999), "Unknown");
        assert_eq!(classify(i32::MIN), "Unknown");
        assert_eq!(classify(ReservedCode::Reload.code()), "Unknown");
    }

    #[test]
    fn reserved_codes_are_outside_standard_signals() {
        for reserved in ReservedCode::ALL {
            assert!(reserved.code() > SIGNAL_EXIT_BASE + libc::SIGSYS);
            assert_eq!(signal_number(reserved.code()), None);
            assert_eq!(ReservedCode::from_code(reserved.code()), Some(reserved));
        }
    }

    #[test]
    fn signal_number_bounds() {
        assert_eq!(signal_number(SIGNAL_EXIT_BASE), None);
        assert_eq!(signal_number(SIGNAL_EXIT_BASE + 9), Some(9));
        assert_eq!(signal_number(SIGNAL_EXIT_BASE + libc::SIGRTMAX() + 1), None);
        assert_eq!(signal_number(i32::MIN), None);
    }
}
