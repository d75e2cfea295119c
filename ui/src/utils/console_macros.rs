/// Browser console logging with a millisecond timestamp prefix.
///
/// These wrap gloo_console and format eagerly so only plain strings cross
/// into JavaScript. They call into the browser, so keep them out of code
/// that runs in native unit tests.
#[macro_export]
macro_rules! console_stamped {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => { $crate::console_stamped!(info, $($arg)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::console_stamped!(warn, $($arg)*) };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => { $crate::console_stamped!(error, $($arg)*) };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => { $crate::console_stamped!(debug, $($arg)*) };
}
