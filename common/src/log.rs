//! Status-line macros shared by every crate.
//!
//! They are thin wrappers over `tracing`; the terminal formatter decides how
//! each level is rendered.

/// Target for raw terminal output that skips the level prefix.
pub const PRINT_TARGET: &str = "bandmatch::print";

/// Target used by [`success!`](crate::success) so the formatter can tell it apart from `info!`.
pub const SUCCESS_TARGET: &str = "bandmatch::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "bandmatch::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}
