//! Display-independent logic: exit code classification, markup stripping,
//! button parsing and the detached relaunch.

pub mod buttons;
pub mod exit_code;
pub mod markup;
pub mod report;
pub mod restart;

pub use buttons::split_buttons;
pub use exit_code::classify;
pub use markup::strip_markup;
pub use report::{CrashReport, DialogContent};
