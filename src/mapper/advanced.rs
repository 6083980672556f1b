use super::standard::impl_standard;
use crate::mapper::LevelMapper;

/// Maps a [`LevelMapper`] to the [`Advanced`](crate::Advanced) interface.
///
/// Each method forwards to the primitive with its level fixed: `debug` always
/// prints at [`Level::Debug`](crate::Level::Debug), `info` at
/// [`Level::Info`](crate::Level::Info), and so on.
#[derive(Debug, Clone, Default)]
pub struct AdvancedMap<M> {
    mapper: M,
}

impl<M: LevelMapper> AdvancedMap<M> {
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

/// Implements `Advanced` for a `$ty<M>` holding its mapper in `self.mapper`.
macro_rules! impl_advanced {
    ($ty:ident) => {
        impl<M: $crate::mapper::LevelMapper> $crate::Advanced for $ty<M> {
            fn debug(&self, args: &[$crate::Value]) {
                self.mapper.level_print($crate::Level::Debug, args);
            }

            fn debugf(&self, args: ::std::fmt::Arguments<'_>) {
                self.mapper.level_printf($crate::Level::Debug, args);
            }

            fn debugln(&self, args: &[$crate::Value]) {
                self.mapper.level_println($crate::Level::Debug, args);
            }

            fn info(&self, args: &[$crate::Value]) {
                self.mapper.level_print($crate::Level::Info, args);
            }

            fn infof(&self, args: ::std::fmt::Arguments<'_>) {
                self.mapper.level_printf($crate::Level::Info, args);
            }

            fn infoln(&self, args: &[$crate::Value]) {
                self.mapper.level_println($crate::Level::Info, args);
            }

            fn warn(&self, args: &[$crate::Value]) {
                self.mapper.level_print($crate::Level::Warn, args);
            }

            fn warnf(&self, args: ::std::fmt::Arguments<'_>) {
                self.mapper.level_printf($crate::Level::Warn, args);
            }

            fn warnln(&self, args: &[$crate::Value]) {
                self.mapper.level_println($crate::Level::Warn, args);
            }

            fn error(&self, args: &[$crate::Value]) {
                self.mapper.level_print($crate::Level::Error, args);
            }

            fn errorf(&self, args: ::std::fmt::Arguments<'_>) {
                self.mapper.level_printf($crate::Level::Error, args);
            }

            fn errorln(&self, args: &[$crate::Value]) {
                self.mapper.level_println($crate::Level::Error, args);
            }
        }
    };
}

pub(crate) use impl_advanced;

impl_standard!(AdvancedMap);
impl_advanced!(AdvancedMap);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::testing::{Call, Recorder};
    use crate::{Advanced, Level, Standard, values};

    #[test]
    fn test_each_level_routes_once() {
        let cases: [(Level, fn(&AdvancedMap<Recorder>, &[crate::Value])); 4] = [
            (Level::Debug, |l, a| l.debug(a)),
            (Level::Info, |l, a| l.info(a)),
            (Level::Warn, |l, a| l.warn(a)),
            (Level::Error, |l, a| l.error(a)),
        ];

        for (level, call) in cases {
            let recorder = Recorder::default();
            let logger = AdvancedMap::new(recorder.clone());
            call(&logger, &values!["msg"]);
            assert_eq!(recorder.calls(), vec![Call::Print(level, "msg".to_string())]);
        }
    }

    #[test]
    fn test_formatted_matches_plain() {
        let recorder = Recorder::default();
        let logger = AdvancedMap::new(recorder.clone());

        logger.warnf(format_args!("x={}", 3));
        logger.warn(&values!["x=3"]);

        let calls = recorder.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Printf(Level::Warn, "x=3".to_string()));
        assert_eq!(
            (calls[0].level(), calls[0].text()),
            (calls[1].level(), calls[1].text())
        );
    }

    #[test]
    fn test_line_variants_route_to_println() {
        let recorder = Recorder::default();
        let logger = AdvancedMap::new(recorder.clone());

        logger.debugln(&values!["This is a test.", "So is this."]);
        logger.infoln(&values![1]);
        logger.warnln(&values![2]);
        logger.errorln(&values![3]);

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Println(Level::Debug, "This is a test. So is this.\n".to_string()),
                Call::Println(Level::Info, "1\n".to_string()),
                Call::Println(Level::Warn, "2\n".to_string()),
                Call::Println(Level::Error, "3\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_formatted_variants_keep_level() {
        let recorder = Recorder::default();
        let logger = AdvancedMap::new(recorder.clone());

        logger.debugf(format_args!("d"));
        logger.infof(format_args!("i"));
        logger.errorf(format_args!("This is {} test", "a"));

        let levels: Vec<_> = recorder.calls().iter().map(Call::level).collect();
        assert_eq!(levels, vec![Level::Debug, Level::Info, Level::Error]);
        assert_eq!(recorder.calls()[2].text(), "This is a test");
    }

    #[test]
    fn test_standard_methods_are_available() {
        let recorder = Recorder::default();
        let logger = AdvancedMap::new(recorder.clone());
        logger.print(&values!["plain"]);
        assert_eq!(recorder.calls(), vec![Call::Print(Level::Info, "plain".to_string())]);
    }
}
