use std::sync::mpsc;
use std::time::Duration;

const WORKER_RESULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs blocking `work` on a helper thread and hands its result to
/// `on_result` back on the GTK main loop.
pub(super) fn run_blocking_then<T, W, H>(work: W, on_result: H)
where
    T: Send + 'static,
    W: FnOnce() -> T + Send + 'static,
    H: FnOnce(T) + 'static,
{
    let (tx, rx) = mpsc::channel::<T>();
    std::thread::spawn(move || {
        let _ = tx.send(work());
    });

    let mut on_result = Some(on_result);
    gtk4::glib::timeout_add_local(WORKER_RESULT_POLL_INTERVAL, move || match rx.try_recv() {
        Ok(result) => {
            if let Some(handler) = on_result.take() {
                handler(result);
            }
            gtk4::glib::ControlFlow::Break
        }
        Err(mpsc::TryRecvError::Empty) => gtk4::glib::ControlFlow::Continue,
        Err(mpsc::TryRecvError::Disconnected) => {
            tracing::warn!("worker thread exited without a result");
            gtk4::glib::ControlFlow::Break
        }
    });
}
