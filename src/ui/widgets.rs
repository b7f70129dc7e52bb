//! Small widget constructors shared by the dialogs.

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Button, Justification, Label, Orientation};

/// Wrapped, left-anchored label carrying `css_class`.
pub fn text_label(text: &str, css_class: &str, justify: Justification) -> Label {
    let label = Label::new(Some(text));
    label.set_wrap(true);
    label.set_justify(justify);
    label.set_xalign(0.0);
    label.add_css_class(css_class);
    label
}

/// Vertical container holding the whole dialog.
pub fn content_box() -> GtkBox {
    GtkBox::new(Orientation::Vertical, 4)
}

/// Right-aligned row for action buttons.
pub fn action_row() -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, 0);
    row.set_halign(Align::End);
    row
}

pub fn action_button(label: &str) -> Button {
    let button = Button::with_label(label);
    button.set_halign(Align::End);
    button
}

/// Let `widget` take any spare space in both directions.
pub fn expand(widget: &impl IsA<gtk4::Widget>) {
    widget.set_vexpand(true);
    widget.set_hexpand(true);
}
