//! GTK presentation layer.

pub mod app;
pub mod context;
pub mod dialogs;
pub mod events;
pub mod widgets;
