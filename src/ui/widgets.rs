use gtk4::prelude::*;
use gtk4::{Button, Label};

pub fn text_button(label: &str, tooltip: &str, size: i32, extra_classes: &[&str]) -> Button {
    let button = Button::with_label(label);
    button.set_focus_on_click(false);
    button.set_tooltip_text(Some(tooltip));
    button.add_css_class("flat");
    for css_class in extra_classes {
        button.add_css_class(css_class);
    }
    button.set_size_request(size, size);
    button
}

pub fn styled_label(text: &str, css_class: &str) -> Label {
    let label = Label::new(Some(text));
    label.add_css_class(css_class);
    label.set_justify(gtk4::Justification::Center);
    label.set_halign(gtk4::Align::Center);
    label
}
