use std::cell::Cell;
use std::rc::Rc;

use crate::error::AppResult;
use crate::ui::LAYOUT_TOKENS;
use gtk4::prelude::*;
use gtk4::Application;

mod agenda_view;
mod bootstrap;
mod hypr;
mod note_window;
mod runtime_css;
mod worker;

use self::bootstrap::*;
use self::hypr::*;
use self::note_window::*;
use self::runtime_css::*;
use self::worker::*;

const APPLICATION_ID: &str = "io.github.pixnote";

#[derive(Debug, Default)]
pub struct App {
    windows_opened: u32,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn windows_opened(&self) -> u32 {
        self.windows_opened
    }

    pub fn start(&mut self) -> AppResult<()> {
        let bootstrap = bootstrap_app_runtime();
        let skin_css = bootstrap.skin.as_ref().map(SkinCss::from_stored);
        let palette = bootstrap.palette;
        let clock = bootstrap.clock;
        let avatar = bootstrap.avatar;

        tracing::info!("starting gtk runtime");
        let application = Application::new(
            Some(APPLICATION_ID),
            gtk4::gio::ApplicationFlags::NON_UNIQUE,
        );

        let windows_opened = Rc::new(Cell::new(0_u32));
        let windows_opened_for_activate = windows_opened.clone();
        application.connect_activate(move |app| {
            if windows_opened_for_activate.get() > 0 {
                tracing::debug!("ignoring duplicate gtk activate signal");
                return;
            }
            install_runtime_css(LAYOUT_TOKENS, &palette, skin_css.as_ref());

            let window = build_note_window(app, LAYOUT_TOKENS, clock, avatar.as_deref());
            window.present();
            windows_opened_for_activate.set(windows_opened_for_activate.get() + 1);
            tracing::info!(skinned = skin_css.is_some(), "presented note window");

            keep_note_on_top();
        });

        // Only argv[0]: the note takes no command-line flags.
        let gtk_args: Vec<String> = std::env::args().take(1).collect();
        let status = application.run_with_args(&gtk_args);
        tracing::info!(?status, "gtk runtime exited");

        self.windows_opened = windows_opened.get();
        Ok(())
    }
}

fn keep_note_on_top() {
    if !running_under_hyprland() {
        tracing::debug!("skipping pin request outside Hyprland");
        return;
    }

    run_blocking_then(
        || request_window_pin(NOTE_WINDOW_TITLE),
        |pinned| {
            if pinned {
                tracing::info!("note window pinned above other windows");
            } else {
                tracing::warn!("failed to pin note window");
            }
        },
    );
}
