use std::sync::atomic::{AtomicBool, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(true);

#[inline(always)]
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::SeqCst)
}

pub fn disable() {
    ENABLED.store(false, Ordering::SeqCst)
}

pub fn enable() {
    ENABLED.store(true, Ordering::SeqCst)
}

/// Log target used by every record produced by the adapter core.
pub const TARGET: &str = "dap";

#[macro_export]
macro_rules! dap_log {
    ($lvl:expr, $($arg:tt)+) => {
        if $crate::log::is_enabled() {
            ::log::log!(target: $crate::log::TARGET, $lvl, $($arg)+)
        }
    };
}

#[macro_export]
macro_rules! dap_info {
    ($($arg:tt)+) => {
        $crate::dap_log!(::log::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! dap_warn {
    ($($arg:tt)+) => {
        $crate::dap_log!(::log::Level::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! dap_error {
    ($($arg:tt)+) => {
        $crate::dap_log!(::log::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! dap_debug {
    ($($arg:tt)+) => {
        $crate::dap_log!(::log::Level::Debug, $($arg)+)
    };
}
