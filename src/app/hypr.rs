use std::process::Command;
use std::time::Duration;

const HYPR_PIN_RETRY_COUNT: u8 = 20;
const HYPR_PIN_RETRY_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct HyprClientMatch {
    pub(super) address: String,
    pub(super) floating: bool,
    pub(super) pinned: bool,
}

impl HyprClientMatch {
    /// Dispatchers still needed to pin this client. Hyprland only pins
    /// floating windows, so a tiled client is floated first.
    pub(super) fn pin_dispatchers(&self) -> &'static [&'static str] {
        match (self.floating, self.pinned) {
            (_, true) => &[],
            (true, false) => &["pin"],
            (false, false) => &["setfloating", "pin"],
        }
    }
}

pub(super) fn hypr_client_match_from_json(
    stdout: &[u8],
    expected_title: &str,
) -> Option<HyprClientMatch> {
    let parsed: serde_json::Value = serde_json::from_slice(stdout).ok()?;
    let clients = parsed.as_array()?;
    for client in clients {
        let Some(title) = client.get("title").and_then(serde_json::Value::as_str) else {
            continue;
        };
        if title != expected_title {
            continue;
        }
        let Some(address) = client.get("address").and_then(serde_json::Value::as_str) else {
            continue;
        };
        let flag = |key: &str| {
            client
                .get(key)
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false)
        };
        return Some(HyprClientMatch {
            address: address.to_string(),
            floating: flag("floating"),
            pinned: flag("pinned"),
        });
    }
    None
}

fn find_hypr_window_match(expected_title: &str) -> Option<HyprClientMatch> {
    let outcome = Command::new("hyprctl")
        .args(["-j", "clients"])
        .output()
        .ok()?;
    if !outcome.status.success() {
        return None;
    }
    hypr_client_match_from_json(&outcome.stdout, expected_title)
}

fn retry_until_some<T, F, S>(
    retry_count: u8,
    retry_delay: Duration,
    mut action: F,
    mut sleep: S,
) -> Option<T>
where
    F: FnMut(u8) -> Option<T>,
    S: FnMut(Duration),
{
    if retry_count == 0 {
        return None;
    }

    for attempt in 1..=retry_count {
        if let Some(value) = action(attempt) {
            return Some(value);
        }

        if attempt < retry_count {
            sleep(retry_delay);
        }
    }

    None
}

pub(super) fn running_under_hyprland() -> bool {
    std::env::var_os("HYPRLAND_INSTANCE_SIGNATURE").is_some()
}

/// Floats and pins the window titled `expected_title` so it stays above
/// other windows. Blocks while the compositor maps the window; call off the
/// GTK thread.
pub(super) fn request_window_pin(expected_title: &str) -> bool {
    retry_until_some(
        HYPR_PIN_RETRY_COUNT,
        HYPR_PIN_RETRY_DELAY,
        |attempt| {
            let matched = find_hypr_window_match(expected_title)?;
            let dispatchers = matched.pin_dispatchers();
            if dispatchers.is_empty() {
                tracing::debug!(title = expected_title, attempt, "window already pinned");
                return Some(true);
            }

            let selector = format!("address:{}", matched.address);
            for dispatcher in dispatchers {
                if !hypr_dispatch(dispatcher, &selector) {
                    return None;
                }
            }

            find_hypr_window_match(expected_title)
                .filter(|verified| verified.floating && verified.pinned)
                .map(|_| true)
        },
        std::thread::sleep,
    )
    .unwrap_or(false)
}

fn hypr_dispatch(dispatcher: &str, selector: &str) -> bool {
    match Command::new("hyprctl")
        .args(["dispatch", dispatcher, selector])
        .output()
    {
        Ok(result) if result.status.success() => {
            tracing::debug!(dispatcher, selector, "requested Hyprland dispatch");
            true
        }
        Ok(result) => {
            let stderr = String::from_utf8_lossy(&result.stderr);
            tracing::warn!(
                dispatcher,
                selector,
                status = result.status.code(),
                stderr = stderr.trim(),
                "hyprctl dispatch returned non-zero status"
            );
            false
        }
        Err(err) => {
            tracing::debug!(dispatcher, selector, ?err, "hyprctl dispatch failed");
            false
        }
    }
}
