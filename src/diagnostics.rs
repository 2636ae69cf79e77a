//! Console logging shared by every behavior. Browser builds write to the devtools
//! console, native builds (tests) to stderr.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

#[inline]
pub fn log_info(scope: &str, message: &str) {
    emit(false, &format!("[{scope}] {message}"));
}

#[inline]
pub fn log_warn(scope: &str, message: &str) {
    emit(true, &format!("[{scope}] {message}"));
}

/// Milliseconds since an arbitrary origin, usable as the `started_at` for `log_perf`.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[inline]
pub fn log_perf(scope: &str, started_at: f64, details: &str) {
    let elapsed_ms = (now_ms() - started_at).max(0.0).round() as u64;
    if details.trim().is_empty() {
        emit(false, &format!("[perf] {scope} took {elapsed_ms}ms"));
    } else {
        emit(false, &format!("[perf] {scope} took {elapsed_ms}ms | {details}"));
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(warn: bool, line: &str) {
    if warn {
        console::warn_1(&line.into());
    } else {
        console::log_1(&line.into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_warn: bool, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_ms_is_monotonic_enough_for_perf_logs() {
        let started = now_ms();
        assert!(started > 0.0);
        assert!(now_ms() >= started);
        log_perf("test", started, "");
        log_perf("test", started, "with details");
    }
}
