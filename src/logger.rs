//! The logger contract shared by every backend.
//!
//! [`Standard`] mirrors a level-less "print" logger with fatal and panic
//! escapes, [`Advanced`] adds the per-level methods, and [`Contextual`] adds
//! field attachment. Each logging method comes in three forms:
//!
//! - plain (`info`): arguments joined by [`crate::sprint`]
//! - formatted (`infof`): a [`format_args!`] value
//! - line (`infoln`): arguments joined by single spaces

use std::any::Any;
use std::fmt::Arguments;

use crate::{Fields, Value};

/// Print, fatal and panic logging.
pub trait Standard: Send + Sync {
    /// The wrapped backend handle, for backend-specific operations.
    fn underlying(&self) -> &dyn Any;

    /// Log at info level.
    fn print(&self, args: &[Value]);
    fn printf(&self, args: Arguments<'_>);
    fn println(&self, args: &[Value]);

    /// Log at fatal level, then exit the process with status 1.
    ///
    /// Never call this on a path the caller expects to recover from.
    fn fatal(&self, args: &[Value]) -> !;
    fn fatalf(&self, args: Arguments<'_>) -> !;
    fn fatalln(&self, args: &[Value]) -> !;

    /// Log at panic level, then panic with the message as payload.
    fn panic(&self, args: &[Value]) -> !;
    fn panicf(&self, args: Arguments<'_>) -> !;
    fn panicln(&self, args: &[Value]) -> !;
}

/// Leveled logging.
pub trait Advanced: Standard {
    /// Excessive debug information.
    fn debug(&self, args: &[Value]);
    fn debugf(&self, args: Arguments<'_>);
    fn debugln(&self, args: &[Value]);

    /// General information.
    fn info(&self, args: &[Value]);
    fn infof(&self, args: Arguments<'_>);
    fn infoln(&self, args: &[Value]);

    /// Alert about something wrong.
    fn warn(&self, args: &[Value]);
    fn warnf(&self, args: Arguments<'_>);
    fn warnln(&self, args: &[Value]);

    /// Only for real errors.
    fn error(&self, args: &[Value]);
    fn errorf(&self, args: Arguments<'_>);
    fn errorln(&self, args: &[Value]);
}

/// Leveled logging with attached context.
///
/// Adding context never changes the receiver: a new logger is returned and
/// both may be used independently, from any thread.
pub trait Contextual: Advanced {
    /// Same as `with_fields(&[key, value])`.
    fn with_field(&self, key: &str, value: Value) -> Box<dyn Contextual> {
        self.with_fields(&[Value::from(key), value])
    }

    /// Attach a flat `[k1, v1, k2, v2, ...]` sequence of fields.
    ///
    /// A trailing unpaired element and pairs with a non-string key are
    /// dropped.
    fn with_fields(&self, fields: &[Value]) -> Box<dyn Contextual>;

    /// Fields attached so far.
    fn fields(&self) -> &Fields;
}
