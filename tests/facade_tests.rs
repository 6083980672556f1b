use std::any::Any;
use std::fmt::Arguments;
use std::sync::{Arc, Mutex, PoisonError};

use loggers::mapper::{AdvancedMap, ContextualMap, ContextualMapper, LevelMapper, StandardMap};
use loggers::{
    Advanced, Contextual, Fields, Level, Standard, Value, errorf, global, infof, printf, sprint,
    sprintln, values,
};

// Tests in this file swap the process-wide default.
static DEFAULT_LOCK: Mutex<()> = Mutex::new(());

type Lines = Arc<Mutex<Vec<String>>>;

/// Backend written against the public primitive only.
#[derive(Clone, Default)]
struct MemoryMapper {
    lines: Lines,
    fields: Fields,
}

impl MemoryMapper {
    fn push(&self, level: Level, text: String) {
        let line = if self.fields.is_empty() {
            format!("{} {}", level.as_str(), text)
        } else {
            format!("{} {} {{{}}}", level.as_str(), text, self.fields)
        };
        self.lines.lock().unwrap().push(line);
    }
}

impl LevelMapper for MemoryMapper {
    fn level_print(&self, level: Level, args: &[Value]) {
        self.push(level, sprint(args));
    }

    fn level_printf(&self, level: Level, args: Arguments<'_>) {
        self.push(level, args.to_string());
    }

    fn level_println(&self, level: Level, args: &[Value]) {
        self.push(level, sprintln(args).trim_end().to_string());
    }

    fn underlying(&self) -> &dyn Any {
        &self.lines
    }
}

impl ContextualMapper for MemoryMapper {
    fn with_fields(&self, fields: &[Value]) -> Box<dyn Contextual> {
        Box::new(ContextualMap::new(MemoryMapper {
            lines: Arc::clone(&self.lines),
            fields: self.fields.with_pairs(fields),
        }))
    }

    fn fields(&self) -> &Fields {
        &self.fields
    }
}

fn memory_logger() -> (Lines, ContextualMap<MemoryMapper>) {
    let mapper = MemoryMapper::default();
    (Arc::clone(&mapper.lines), ContextualMap::new(mapper))
}

fn snapshot(lines: &Lines) -> Vec<String> {
    lines.lock().unwrap().clone()
}

#[test]
fn test_custom_mapper_gets_full_contract() {
    let (lines, logger) = memory_logger();

    logger.debug(&values!["a", "b"]);
    logger.infof(format_args!("n={}", 1));
    logger.warnln(&values!["x", 2]);
    logger.error(&values![1, 2]);
    logger.print(&values!["plain"]);

    assert_eq!(
        snapshot(&lines),
        vec!["debug ab", "info n=1", "warn x 2", "error 1 2", "info plain"]
    );
}

#[test]
fn test_fields_flow_through_custom_mapper() {
    let (lines, logger) = memory_logger();
    let scoped = logger
        .with_field("user", Value::from("bob"))
        .with_fields(&values!["attempt", 3, 99]);

    scoped.info(&values!["login"]);
    logger.info(&values!["bare"]);

    assert_eq!(scoped.fields().len(), 2);
    assert!(logger.fields().is_empty());
    assert_eq!(
        snapshot(&lines),
        vec!["info login {user=bob, attempt=3}", "info bare"]
    );
}

#[test]
fn test_standard_and_advanced_adapters() {
    let mapper = MemoryMapper::default();
    let lines = Arc::clone(&mapper.lines);

    let standard = StandardMap::new(mapper.clone());
    standard.println(&values!["hello", "world"]);

    let advanced = AdvancedMap::new(mapper);
    advanced.warnf(format_args!("{}-{}", "a", "b"));

    assert_eq!(snapshot(&lines), vec!["info hello world", "warn a-b"]);
    assert!(
        advanced
            .underlying()
            .downcast_ref::<Lines>()
            .is_some_and(|handle| Arc::ptr_eq(handle, &lines))
    );
}

#[test]
fn test_panic_logs_then_unwinds() {
    let (lines, logger) = memory_logger();
    let result = std::panic::catch_unwind::<_, ()>(std::panic::AssertUnwindSafe(|| {
        logger.with_field("k", Value::from(1)).panicln(&values!["gone", "wrong"])
    }));

    let payload = result.expect_err("panic must unwind");
    let message = payload.downcast_ref::<String>().expect("string payload");
    assert!(message.contains("gone"));
    assert_eq!(snapshot(&lines), vec!["panic gone wrong {k=1}"]);
}

#[test]
fn test_global_default_and_macros() {
    let _guard = DEFAULT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let (lines, logger) = memory_logger();
    let previous = global::set_default(Box::new(logger));

    global::info(&values!["direct"]);
    infof!("via {}", "macro");
    printf!("printed {}", 1);
    let scoped = global::with_field("req", Value::from(5));
    errorf!(scoped => "failed after {}s", 2);

    let restored = global::set_default_arc(previous);
    assert!(
        restored
            .underlying()
            .downcast_ref::<Lines>()
            .is_some_and(|handle| Arc::ptr_eq(handle, &lines))
    );

    assert_eq!(
        snapshot(&lines),
        vec![
            "info direct",
            "info via macro",
            "info printed 1",
            "error failed after 2s {req=5}",
        ]
    );
}

#[test]
fn test_with_underlying_on_default() {
    let _guard = DEFAULT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let (lines, logger) = memory_logger();
    let previous = global::set_default(Box::new(logger));

    let count = global::with_underlying(|handle: &Lines| {
        handle.lock().unwrap().push("via handle".to_string());
        handle.lock().unwrap().len()
    });
    global::set_default_arc(previous);

    assert_eq!(count, Some(1));
    assert_eq!(snapshot(&lines), vec!["via handle"]);
}

#[test]
fn test_error_raise_panics_through_facade() {
    let (lines, logger) = memory_logger();
    let result = std::panic::catch_unwind::<_, ()>(std::panic::AssertUnwindSafe(|| {
        loggers::Error::panic("state corrupted").raise(&logger)
    }));
    assert!(result.is_err());
    assert_eq!(snapshot(&lines), vec!["panic state corrupted"]);
}
