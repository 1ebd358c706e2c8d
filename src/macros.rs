//! Small crate-wide convenience macros.
//!
//! Logging goes to the browser console.  Native builds (unit tests) have no
//! console to talk to, so the arguments are formatted and dropped there.

/// Debug-level console log.  Compiled out of release builds.
///
/// ```rust,ignore
/// debug_log!("route changed to {}", route.path());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        let _msg = format!($($arg)*);
        #[cfg(all(target_arch = "wasm32", debug_assertions))]
        web_sys::console::log_1(&_msg.into());
    }};
}

/// Warning-level console log.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        let _msg = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&_msg.into());
    }};
}

/// Error-level console log.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        let _msg = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&_msg.into());
    }};
}
