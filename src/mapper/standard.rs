use crate::mapper::LevelMapper;

/// Maps a [`LevelMapper`] to the [`Standard`](crate::Standard) interface.
///
/// Print goes out at info level. Fatal and panic are written first, then the
/// process exits or the current thread unwinds.
#[derive(Debug, Clone, Default)]
pub struct StandardMap<M> {
    mapper: M,
}

impl<M: LevelMapper> StandardMap<M> {
    /// Wrap a mapper.
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn into_inner(self) -> M {
        self.mapper
    }
}

pub(crate) fn exit_fatal() -> ! {
    std::process::exit(1)
}

pub(crate) fn raise(message: String) -> ! {
    std::panic::panic_any(message)
}

/// Implements `Standard` for a `$ty<M>` holding its mapper in `self.mapper`.
macro_rules! impl_standard {
    ($ty:ident) => {
        impl<M: $crate::mapper::LevelMapper> $crate::Standard for $ty<M> {
            fn underlying(&self) -> &dyn ::std::any::Any {
                self.mapper.underlying()
            }

            fn print(&self, args: &[$crate::Value]) {
                self.mapper.level_print($crate::Level::Info, args);
            }

            fn printf(&self, args: ::std::fmt::Arguments<'_>) {
                self.mapper.level_printf($crate::Level::Info, args);
            }

            fn println(&self, args: &[$crate::Value]) {
                self.mapper.level_println($crate::Level::Info, args);
            }

            fn fatal(&self, args: &[$crate::Value]) -> ! {
                self.mapper.level_print($crate::Level::Fatal, args);
                $crate::mapper::exit_fatal()
            }

            fn fatalf(&self, args: ::std::fmt::Arguments<'_>) -> ! {
                self.mapper.level_printf($crate::Level::Fatal, args);
                $crate::mapper::exit_fatal()
            }

            fn fatalln(&self, args: &[$crate::Value]) -> ! {
                self.mapper.level_println($crate::Level::Fatal, args);
                $crate::mapper::exit_fatal()
            }

            fn panic(&self, args: &[$crate::Value]) -> ! {
                self.mapper.level_print($crate::Level::Panic, args);
                $crate::mapper::raise($crate::sprint(args))
            }

            fn panicf(&self, args: ::std::fmt::Arguments<'_>) -> ! {
                self.mapper.level_printf($crate::Level::Panic, args);
                $crate::mapper::raise(args.to_string())
            }

            fn panicln(&self, args: &[$crate::Value]) -> ! {
                self.mapper.level_println($crate::Level::Panic, args);
                $crate::mapper::raise($crate::sprint(args))
            }
        }
    };
}

pub(crate) use impl_standard;

impl_standard!(StandardMap);
