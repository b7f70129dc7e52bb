//! Button clicks as messages on a channel read by the main loop.
//!
//! Each dialog owns one bounded channel. Buttons `try_send` their action; a
//! local future on the GLib main context takes the first one, runs the
//! handler and closes the window. Clicks after that are dropped, so exactly
//! one user action ends the dialog.

use async_channel::{Receiver, Sender};
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Button};
use log::debug;

/// Channel carrying the single action a dialog will perform.
pub fn action_channel<A>() -> (Sender<A>, Receiver<A>) {
    async_channel::bounded(1)
}

/// Send `action` when `button` is clicked.
pub fn connect_action<A: Clone + 'static>(button: &Button, tx: &Sender<A>, action: A) {
    let tx = tx.clone();
    button.connect_clicked(move |_| {
        if let Err(e) = tx.try_send(action.clone()) {
            debug!("Ignoring click, dialog already has an action: {}", e);
        }
    });
}

/// Run `handler` for the first action received, then close `window`.
pub fn spawn_action_handler<A, F>(window: &ApplicationWindow, rx: Receiver<A>, handler: F)
where
    A: 'static,
    F: FnOnce(A) + 'static,
{
    let window = window.clone();
    glib::MainContext::default().spawn_local(async move {
        let action = match rx.recv().await {
            Ok(action) => action,
            Err(e) => {
                debug!("Dialog action channel closed: {}", e);
                return;
            }
        };

        rx.close();
        handler(action);
        window.close();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_holds_only_the_first_action() {
        let (tx, rx) = action_channel();
        assert!(tx.try_send("first").is_ok());
        assert!(tx.try_send("second").is_err());
        assert_eq!(rx.try_recv(), Ok("first"));
    }

    #[test]
    fn closed_channel_rejects_late_clicks() {
        let (tx, rx) = action_channel();
        tx.try_send(1).unwrap();
        assert_eq!(rx.try_recv(), Ok(1));
        rx.close();
        assert!(tx.try_send(2).is_err());
    }
}
