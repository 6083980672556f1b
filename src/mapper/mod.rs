//! Adapters lifting a minimal "print at level" backend to the full contract.
//!
//! A backend implements [`LevelMapper`] and wraps itself in one of:
//!
//! - [`StandardMap`]: [`Standard`](crate::Standard) only
//! - [`AdvancedMap`]: [`Advanced`](crate::Advanced)
//! - [`ContextualMap`]: [`Contextual`](crate::Contextual), for mappers that
//!   also implement [`ContextualMapper`]
//!
//! Backends without native field support can get field tracking for free
//! from [`PostfixMapper`].

mod advanced;
mod contextual;
mod postfix;
mod standard;

use std::any::Any;
use std::fmt::Arguments;

use crate::{Contextual, Fields, Level, Value};

pub use advanced::AdvancedMap;
pub use contextual::ContextualMap;
pub use postfix::PostfixMapper;
pub use standard::StandardMap;
pub(crate) use standard::{exit_fatal, raise};

/// The minimal primitive a backend must provide.
pub trait LevelMapper: Send + Sync {
    /// Print arguments joined as by [`crate::sprint`].
    fn level_print(&self, level: Level, args: &[Value]);

    /// Print formatted arguments.
    fn level_printf(&self, level: Level, args: Arguments<'_>);

    /// Print arguments joined as by [`crate::sprintln`].
    fn level_println(&self, level: Level, args: &[Value]);

    /// The wrapped backend handle.
    fn underlying(&self) -> &dyn Any;
}

/// A primitive that also carries fields.
pub trait ContextualMapper: LevelMapper {
    /// Return a new logger carrying the current fields plus `fields`.
    fn with_fields(&self, fields: &[Value]) -> Box<dyn Contextual>;

    fn fields(&self) -> &Fields;
}
