//! Generic dialog: title, body text and caller-defined buttons.
//!
//! The label of the clicked button is written to stdout before the window
//! closes, which is how calling scripts learn the answer.

use crate::config::{css, dialog};
use crate::core::DialogContent;
use crate::ui::context::DialogContext;
use crate::ui::{events, widgets};
use gtk4::prelude::*;
use gtk4::Justification;
use log::{error, info};
use std::io::{self, Write};

pub fn show_message_dialog(ctx: &DialogContext, content: &DialogContent) {
    let window = ctx.new_window(
        content.window_title(dialog::DEFAULT_APP_TITLE),
        dialog::WINDOW_HEIGHT,
    );
    let container = widgets::content_box();
    window.set_child(Some(&container));

    if let Some(title) = &content.title {
        let label = widgets::text_label(title, css::TITLE, Justification::Left);
        widgets::expand(&label);
        container.append(&label);
    }

    if let Some(text) = &content.text {
        let label = widgets::text_label(text, css::DESCRIPTION, Justification::Left);
        widgets::expand(&label);
        container.append(&label);
    }

    let (tx, rx) = events::action_channel::<String>();
    if let Some(buttons) = &content.buttons {
        let actions = widgets::action_row();
        widgets::expand(&actions);
        container.append(&actions);

        for label in buttons {
            let button = widgets::action_button(label);
            events::connect_action(&button, &tx, label.clone());
            actions.append(&button);
        }
    }

    events::spawn_action_handler(&window, rx, |label: String| {
        info!("Dialog button clicked: {:?}", label);
        if let Err(e) = write_choice(&mut io::stdout().lock(), &label) {
            error!("Failed to print clicked button: {}", e);
        }
    });

    ctx.apply_stylesheet(&window);
    window.present();
}

/// Write the chosen label as one line and flush it.
fn write_choice(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{label}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_is_one_line() {
        let mut out = Vec::new();
        write_choice(&mut out, "Cancel").unwrap();
        assert_eq!(out, b"Cancel\n");
    }

    #[test]
    fn empty_label_prints_empty_line() {
        let mut out = Vec::new();
        write_choice(&mut out, "").unwrap();
        assert_eq!(out, b"\n");
    }
}
