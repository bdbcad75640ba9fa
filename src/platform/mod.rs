//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time
//! - Timers (save indicator reset)
//! - Printing

/// Milliseconds since the epoch
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

/// Ask the browser to print the page (print CSS hides the page chrome)
#[cfg(target_arch = "wasm32")]
pub fn print() {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.print() {
                log::warn!("Print failed: {:?}", e);
            }
        }
        None => log::warn!("No window to print"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn print() {
    log::info!("Printing is only available in the browser");
}

/// Delay argument for `setTimeout`, saturating at `i32::MAX`
pub fn timeout_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// A single pending `setTimeout`, replaced when re-armed
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct Timeout {
    handle: Option<i32>,
    // Keeps the callback alive until it fires or is replaced
    closure: Option<wasm_bindgen::closure::Closure<dyn FnMut()>>,
}

#[cfg(target_arch = "wasm32")]
impl Timeout {
    /// Cancel any pending callback and schedule `callback` after `ms`
    pub fn restart(&mut self, ms: u32, callback: impl FnMut() + 'static) {
        use wasm_bindgen::JsCast;

        self.cancel();
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(callback);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout_delay(ms),
        ) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.closure = Some(closure);
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            window.clear_timeout_with_handle(handle);
        }
        self.closure = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_delay_saturates() {
        assert_eq!(timeout_delay(2000), 2000);
        assert_eq!(timeout_delay(i32::MAX as u32), i32::MAX);
        assert_eq!(timeout_delay(u32::MAX), i32::MAX);
    }

    #[test]
    fn test_now_is_monotonic_enough() {
        let a = now_ms();
        let b = now_ms();
        assert!(a > 0.0);
        assert!(b >= a);
    }
}
