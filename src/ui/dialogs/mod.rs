//! Dialog windows.
//!
//! - `crash`: crash report with a restart action
//! - `message`: generic dialog that prints the clicked button label

pub mod crash;
pub mod message;
