//! Modal dialogs for the HyprYou shell.
//!
//! `crash-dialog` explains why the shell exited and can relaunch it;
//! `hyprland-dialog` shows arbitrary text with caller-defined buttons and
//! prints the chosen label.

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;
