use std::path::Path;

use crate::clock::ClockFormatter;
use crate::ui::{styled_label, text_button, StyleTokens};
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, Entry, Label, MediaFile, Orientation,
    Picture, PolicyType, ScrolledWindow, WindowHandle,
};

use super::agenda_view::AgendaView;

pub(super) const NOTE_WINDOW_TITLE: &str = "pixnote";
const TODO_HEADING: &str = "⊹ TO-DO LIST ⊹";
const TASK_PLACEHOLDER: &str = "Yeni görev...";

pub(super) fn build_note_window(
    app: &Application,
    tokens: StyleTokens,
    clock: ClockFormatter,
    avatar: Option<&Path>,
) -> ApplicationWindow {
    let window = ApplicationWindow::new(app);
    window.set_title(Some(NOTE_WINDOW_TITLE));
    window.set_decorated(false);
    window.set_resizable(false);
    window.set_default_size(tokens.window_width, tokens.window_height);
    window.add_css_class("pixnote-root");

    let frame = GtkBox::new(Orientation::Vertical, tokens.spacing_10);
    frame.add_css_class("note-frame");
    frame.set_margin_top(tokens.spacing_10);
    frame.set_margin_bottom(tokens.spacing_10);
    frame.set_margin_start(tokens.spacing_10);
    frame.set_margin_end(tokens.spacing_10);

    let (header, clock_label, date_label) = build_header(&window, tokens, avatar);
    frame.append(&header);

    let heading = styled_label(TODO_HEADING, "note-heading");
    heading.set_halign(Align::Fill);
    frame.append(&heading);

    let agenda = AgendaView::new(tokens);
    let scroller = ScrolledWindow::new();
    scroller.set_policy(PolicyType::Never, PolicyType::Automatic);
    scroller.set_vexpand(true);
    scroller.set_child(Some(agenda.widget()));

    let task_panel = GtkBox::new(Orientation::Vertical, 0);
    task_panel.add_css_class("task-panel");
    task_panel.set_vexpand(true);
    task_panel.append(&scroller);
    frame.append(&task_panel);

    let entry = Entry::new();
    entry.add_css_class("task-entry");
    entry.set_placeholder_text(Some(TASK_PLACEHOLDER));
    entry.connect_activate(move |entry| {
        if agenda.add_task(entry.text().as_str()).is_some() {
            entry.set_text("");
        }
    });
    frame.append(&entry);

    // Dragging anywhere outside interactive widgets moves the borderless window.
    let handle = WindowHandle::new();
    handle.set_child(Some(&frame));
    window.set_child(Some(&handle));

    start_clock(&clock_label, &date_label, clock, tokens.clock_refresh_secs);

    window
}

fn build_header(
    window: &ApplicationWindow,
    tokens: StyleTokens,
    avatar: Option<&Path>,
) -> (GtkBox, Label, Label) {
    let header = GtkBox::new(Orientation::Horizontal, tokens.spacing_10);

    if let Some(path) = avatar {
        header.append(&build_avatar(path, tokens.avatar_size));
    }

    let time_box = GtkBox::new(Orientation::Vertical, tokens.spacing_2);
    time_box.set_hexpand(true);
    time_box.set_valign(Align::Center);
    let clock_label = styled_label("", "note-clock");
    let date_label = styled_label("", "note-date");
    time_box.append(&clock_label);
    time_box.append(&date_label);
    header.append(&time_box);

    let close_button = text_button("x", "Close", tokens.close_button_size, &["note-close"]);
    close_button.set_valign(Align::Start);
    let window = window.downgrade();
    close_button.connect_clicked(move |_| {
        if let Some(window) = window.upgrade() {
            tracing::info!("closing note window");
            window.close();
        }
    });
    header.append(&close_button);

    (header, clock_label, date_label)
}

fn build_avatar(path: &Path, size: i32) -> Picture {
    let is_gif = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));
    let picture = if is_gif {
        let media = MediaFile::for_filename(path);
        media.set_loop(true);
        media.play();
        Picture::for_paintable(&media)
    } else {
        Picture::for_filename(path)
    };
    picture.add_css_class("note-avatar");
    picture.set_can_shrink(true);
    picture.set_size_request(size, size);
    picture.set_valign(Align::Center);
    picture
}

fn start_clock(clock_label: &Label, date_label: &Label, clock: ClockFormatter, every_secs: u32) {
    render_clock(clock_label, date_label, clock);

    let clock_label = clock_label.downgrade();
    let date_label = date_label.downgrade();
    gtk4::glib::timeout_add_seconds_local(every_secs, move || {
        let (Some(clock_label), Some(date_label)) = (clock_label.upgrade(), date_label.upgrade())
        else {
            return gtk4::glib::ControlFlow::Break;
        };
        render_clock(&clock_label, &date_label, clock);
        gtk4::glib::ControlFlow::Continue
    });
}

fn render_clock(clock_label: &Label, date_label: &Label, clock: ClockFormatter) {
    let reading = clock.now();
    clock_label.set_text(&reading.time);
    date_label.set_text(&reading.date_block());
}
