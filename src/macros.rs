/// Build an array of [`Value`](crate::Value)s from mixed expressions.
///
/// ```
/// use loggers::{Value, values};
///
/// let args = values!["answer", 42, true];
/// assert_eq!(args[1], Value::Int(42));
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        [$($crate::Value::from($value)),*]
    };
}

/// Formatted debug logging.
///
/// `debugf!(logger => "...", args)` logs through `logger`; without the
/// `logger =>` part the process-wide default is used.
///
/// ```
/// use loggers::{Value, debugf};
///
/// let logger = loggers::global::with_field("conn", Value::from(3));
/// debugf!(logger => "read {} bytes", 512);
/// debugf!("default logger");
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr => $($arg:tt)+) => {{
        use $crate::Advanced as _;
        $logger.debugf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::global::debugf(::std::format_args!($($arg)+))
    };
}

/// Formatted info logging. See [`debugf!`].
#[macro_export]
macro_rules! infof {
    ($logger:expr => $($arg:tt)+) => {{
        use $crate::Advanced as _;
        $logger.infof(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::global::infof(::std::format_args!($($arg)+))
    };
}

/// Formatted warn logging. See [`debugf!`].
#[macro_export]
macro_rules! warnf {
    ($logger:expr => $($arg:tt)+) => {{
        use $crate::Advanced as _;
        $logger.warnf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::global::warnf(::std::format_args!($($arg)+))
    };
}

/// Formatted error logging. See [`debugf!`].
#[macro_export]
macro_rules! errorf {
    ($logger:expr => $($arg:tt)+) => {{
        use $crate::Advanced as _;
        $logger.errorf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::global::errorf(::std::format_args!($($arg)+))
    };
}

/// Formatted print logging. See [`debugf!`].
#[macro_export]
macro_rules! printf {
    ($logger:expr => $($arg:tt)+) => {{
        use $crate::Standard as _;
        $logger.printf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::global::printf(::std::format_args!($($arg)+))
    };
}

/// Formatted fatal logging, then exit with status 1. See [`debugf!`].
#[macro_export]
macro_rules! fatalf {
    ($logger:expr => $($arg:tt)+) => {{
        use $crate::Standard as _;
        $logger.fatalf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::global::fatalf(::std::format_args!($($arg)+))
    };
}

/// Formatted panic logging, then panic. See [`debugf!`].
#[macro_export]
macro_rules! panicf {
    ($logger:expr => $($arg:tt)+) => {{
        use $crate::Standard as _;
        $logger.panicf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::global::panicf(::std::format_args!($($arg)+))
    };
}
