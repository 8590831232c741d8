/// Debug macro that wraps `log::debug!`. Compiled out unless the `debug` feature is enabled.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug")]
        ::log::debug!($($arg)*)
    };
}
