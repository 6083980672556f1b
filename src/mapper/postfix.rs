use std::any::Any;
use std::fmt::Arguments;

use crate::mapper::{ContextualMap, ContextualMapper, LevelMapper};
use crate::{Contextual, Fields, Level, Value};

/// Field tracking for backends without structured fields.
///
/// Wraps any [`LevelMapper`] and appends the accumulated fields to every
/// message as a `[key=value, key=value]` suffix. Nothing is appended while
/// the field set is empty.
#[derive(Debug, Clone, Default)]
pub struct PostfixMapper<M> {
    inner: M,
    fields: Fields,
}

impl<M> PostfixMapper<M> {
    /// Wrap a mapper, starting with no fields.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            fields: Fields::new(),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: LevelMapper> LevelMapper for PostfixMapper<M> {
    fn level_print(&self, level: Level, args: &[Value]) {
        if self.fields.is_empty() {
            return self.inner.level_print(level, args);
        }
        let mut args = args.to_vec();
        args.push(Value::from(" "));
        args.push(Value::from(self.fields.postfix()));
        self.inner.level_print(level, &args);
    }

    fn level_printf(&self, level: Level, args: Arguments<'_>) {
        if self.fields.is_empty() {
            return self.inner.level_printf(level, args);
        }
        self.inner
            .level_printf(level, format_args!("{} {}", args, self.fields.postfix()));
    }

    fn level_println(&self, level: Level, args: &[Value]) {
        if self.fields.is_empty() {
            return self.inner.level_println(level, args);
        }
        let mut args = args.to_vec();
        args.push(Value::from(self.fields.postfix()));
        self.inner.level_println(level, &args);
    }

    fn underlying(&self) -> &dyn Any {
        self.inner.underlying()
    }
}

impl<M: LevelMapper + Clone + 'static> ContextualMapper for PostfixMapper<M> {
    fn with_fields(&self, fields: &[Value]) -> Box<dyn Contextual> {
        Box::new(ContextualMap::new(PostfixMapper {
            inner: self.inner.clone(),
            fields: self.fields.with_pairs(fields),
        }))
    }

    fn fields(&self) -> &Fields {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::testing::{Call, Recorder};
    use crate::{Advanced, Standard, values};

    fn recorded() -> (Recorder, ContextualMap<PostfixMapper<Recorder>>) {
        let recorder = Recorder::default();
        let logger = ContextualMap::new(PostfixMapper::new(recorder.clone()));
        (recorder, logger)
    }

    #[test]
    fn test_no_suffix_without_fields() {
        let (recorder, logger) = recorded();
        logger.info(&values!["hello"]);
        logger.infof(format_args!("n={}", 1));
        logger.infoln(&values!["a", "b"]);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::Print(Level::Info, "hello".to_string()),
                Call::Printf(Level::Info, "n=1".to_string()),
                Call::Println(Level::Info, "a b\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_suffix_on_every_variant() {
        let (recorder, logger) = recorded();
        let logger = logger.with_fields(&values!["test", true]);

        logger.warn(&values!["hello"]);
        logger.warnf(format_args!("x={}", 3));
        logger.warnln(&values!["a", 1]);

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Print(Level::Warn, "hello [test=true]".to_string()),
                Call::Printf(Level::Warn, "x=3 [test=true]".to_string()),
                Call::Println(Level::Warn, "a 1 [test=true]\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_suffix_applies_to_every_later_call() {
        let (recorder, logger) = recorded();
        let logger = logger
            .with_fields(&values!["test", true])
            .with_field("test2", Value::from(false));

        logger.error(&values!["one"]);
        logger.error(&values!["two"]);

        for call in recorder.calls() {
            assert!(call.text().ends_with("[test=true, test2=false]"), "{:?}", call);
        }
        assert_eq!(recorder.calls().len(), 2);
    }

    #[test]
    fn test_underlying_is_inner_handle() {
        let (recorder, logger) = recorded();
        let derived = logger.with_field("a", Value::from(1));
        let handle = derived
            .underlying()
            .downcast_ref::<std::sync::Arc<std::sync::Mutex<Vec<Call>>>>()
            .unwrap();
        assert!(std::sync::Arc::ptr_eq(handle, recorder.handle()));
    }
}
