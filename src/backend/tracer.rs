//! Backend over [`tracing`], implementing the contextual contract directly.
//!
//! Calls map one-to-one onto tracing events of the same level, dispatched
//! through the [`Dispatch`] given at construction. `tracing` has no fatal or
//! panic level, so those are emitted at ERROR before exiting or unwinding.
//! Accumulated fields are attached to every event as a single `fields`
//! attribute.

use std::any::Any;
use std::fmt::Arguments;

use tracing::Dispatch;

use crate::mapper::{exit_fatal, raise};
use crate::{Advanced, Contextual, Fields, Level, Standard, Value, sprint, sprintln};

macro_rules! emit_event {
    ($level:expr, $fields:ident, $message:ident) => {
        if $fields.is_empty() {
            tracing::event!($level, "{}", $message)
        } else {
            tracing::event!($level, fields = %$fields, "{}", $message)
        }
    };
}

/// Contextual logger emitting `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingBackend {
    dispatch: Dispatch,
    fields: Fields,
}

impl TracingBackend {
    /// Emit events through `dispatch`.
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            fields: Fields::new(),
        }
    }

    /// Emit events through the dispatcher that is the default at the time of
    /// this call.
    pub fn current() -> Self {
        Self::new(tracing::dispatcher::get_default(Dispatch::clone))
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    fn emit(&self, level: Level, message: &str) {
        let fields = &self.fields;
        tracing::dispatcher::with_default(&self.dispatch, || match level {
            Level::Debug => emit_event!(tracing::Level::DEBUG, fields, message),
            Level::Info => emit_event!(tracing::Level::INFO, fields, message),
            Level::Warn => emit_event!(tracing::Level::WARN, fields, message),
            Level::Error | Level::Fatal | Level::Panic => {
                emit_event!(tracing::Level::ERROR, fields, message)
            }
        });
    }

    fn emit_ln(&self, level: Level, args: &[Value]) {
        let mut message = sprintln(args);
        message.pop();
        self.emit(level, &message);
    }
}

impl Standard for TracingBackend {
    fn underlying(&self) -> &dyn Any {
        &self.dispatch
    }

    // No level-less events: print goes out at info.
    fn print(&self, args: &[Value]) {
        self.info(args);
    }

    fn printf(&self, args: Arguments<'_>) {
        self.infof(args);
    }

    fn println(&self, args: &[Value]) {
        self.infoln(args);
    }

    fn fatal(&self, args: &[Value]) -> ! {
        self.emit(Level::Fatal, &sprint(args));
        exit_fatal()
    }

    fn fatalf(&self, args: Arguments<'_>) -> ! {
        self.emit(Level::Fatal, &args.to_string());
        exit_fatal()
    }

    fn fatalln(&self, args: &[Value]) -> ! {
        self.emit_ln(Level::Fatal, args);
        exit_fatal()
    }

    fn panic(&self, args: &[Value]) -> ! {
        let message = sprint(args);
        self.emit(Level::Panic, &message);
        raise(message)
    }

    fn panicf(&self, args: Arguments<'_>) -> ! {
        let message = args.to_string();
        self.emit(Level::Panic, &message);
        raise(message)
    }

    fn panicln(&self, args: &[Value]) -> ! {
        self.emit_ln(Level::Panic, args);
        raise(sprint(args))
    }
}

impl Advanced for TracingBackend {
    fn debug(&self, args: &[Value]) {
        self.emit(Level::Debug, &sprint(args));
    }

    fn debugf(&self, args: Arguments<'_>) {
        self.emit(Level::Debug, &args.to_string());
    }

    fn debugln(&self, args: &[Value]) {
        self.emit_ln(Level::Debug, args);
    }

    fn info(&self, args: &[Value]) {
        self.emit(Level::Info, &sprint(args));
    }

    fn infof(&self, args: Arguments<'_>) {
        self.emit(Level::Info, &args.to_string());
    }

    fn infoln(&self, args: &[Value]) {
        self.emit_ln(Level::Info, args);
    }

    fn warn(&self, args: &[Value]) {
        self.emit(Level::Warn, &sprint(args));
    }

    fn warnf(&self, args: Arguments<'_>) {
        self.emit(Level::Warn, &args.to_string());
    }

    fn warnln(&self, args: &[Value]) {
        self.emit_ln(Level::Warn, args);
    }

    fn error(&self, args: &[Value]) {
        self.emit(Level::Error, &sprint(args));
    }

    fn errorf(&self, args: Arguments<'_>) {
        self.emit(Level::Error, &args.to_string());
    }

    fn errorln(&self, args: &[Value]) {
        self.emit_ln(Level::Error, args);
    }
}

impl Contextual for TracingBackend {
    fn with_fields(&self, fields: &[Value]) -> Box<dyn Contextual> {
        Box::new(Self {
            dispatch: self.dispatch.clone(),
            fields: self.fields.with_pairs(fields),
        })
    }

    fn fields(&self) -> &Fields {
        &self.fields
    }
}
