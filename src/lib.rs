pub mod agenda;
pub mod app;
pub mod clock;
mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod skin;
pub mod ui;
pub use error::{AppError, AppResult};

/// Entrypoint used by the binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting pixnote");

    let mut app = app::App::new();
    app.start()?;

    tracing::info!(windows = app.windows_opened(), "pixnote exited");
    Ok(())
}
