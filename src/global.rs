//! The process-wide default logger and free functions over it.
//!
//! Until [`set_default`] is called the default is a
//! [`line`](crate::backend::line) logger writing timestamped lines to stderr.
//!
//! Swapping the default while other threads are logging is memory-safe, but
//! there is no ordering between calls reaching the old logger and calls
//! reaching the new one. Install the default once, during single-threaded
//! startup.

use std::fmt::Arguments;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::backend::line;
use crate::{Contextual, Value};

static LOGGER: Lazy<RwLock<Arc<dyn Contextual>>> = Lazy::new(|| {
    let logger: Arc<dyn Contextual> = Arc::new(line::default_logger());
    RwLock::new(logger)
});

/// The current default logger.
pub fn logger() -> Arc<dyn Contextual> {
    let guard = LOGGER.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Replace the default logger, returning the previous one.
pub fn set_default(logger: Box<dyn Contextual>) -> Arc<dyn Contextual> {
    set_default_arc(Arc::from(logger))
}

/// Replace the default logger with a shared one, returning the previous one.
pub fn set_default_arc(logger: Arc<dyn Contextual>) -> Arc<dyn Contextual> {
    let mut guard = LOGGER.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, logger)
}

/// Run `f` on the default logger's backend handle when it is a `T`.
///
/// Returns `None` when the handle is of another type.
pub fn with_underlying<T: 'static, R>(f: impl FnOnce(&T) -> R) -> Option<R> {
    let current = logger();
    current.underlying().downcast_ref::<T>().map(f)
}

/// Derive a logger from the default with one more field.
pub fn with_field(key: &str, value: Value) -> Box<dyn Contextual> {
    logger().with_field(key, value)
}

/// Derive a logger from the default with more fields.
pub fn with_fields(fields: &[Value]) -> Box<dyn Contextual> {
    logger().with_fields(fields)
}

macro_rules! forward {
    ($($plain:ident, $fmt:ident, $ln:ident;)+) => {
        $(
            pub fn $plain(args: &[Value]) {
                logger().$plain(args)
            }

            pub fn $fmt(args: Arguments<'_>) {
                logger().$fmt(args)
            }

            pub fn $ln(args: &[Value]) {
                logger().$ln(args)
            }
        )+
    };
}

forward! {
    print, printf, println;
    debug, debugf, debugln;
    info, infof, infoln;
    warn, warnf, warnln;
    error, errorf, errorln;
}

/// Log to the default logger at fatal level, then exit with status 1.
pub fn fatal(args: &[Value]) -> ! {
    logger().fatal(args)
}

pub fn fatalf(args: Arguments<'_>) -> ! {
    logger().fatalf(args)
}

pub fn fatalln(args: &[Value]) -> ! {
    logger().fatalln(args)
}

/// Log to the default logger at panic level, then panic.
pub fn panic(args: &[Value]) -> ! {
    logger().panic(args)
}

pub fn panicf(args: Arguments<'_>) -> ! {
    logger().panicf(args)
}

pub fn panicln(args: &[Value]) -> ! {
    logger().panicln(args)
}
