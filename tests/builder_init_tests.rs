use std::io;
use std::sync::{Arc, Mutex};

use loggers::{BackendKind, Value, global, values};
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// The subscriber and the default logger are process-wide, so the steps run
// in order inside one test.
#[test]
fn test_init_without_console_uses_callers_subscriber() {
    loggers::builder()
        .with_timestamp(false)
        .init()
        .expect("line init without console");

    // init() above must not have claimed the global subscriber.
    let buf = SharedBuf::default();
    let writer = buf.clone();
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish()
        .try_init()
        .expect("caller installs its own subscriber");

    loggers::builder()
        .with_backend(BackendKind::Tracing)
        .init()
        .expect("tracing init with a subscriber already installed");
    global::info(&values!["after tracing init"]);
    global::with_field("user", Value::from("bob")).error(&values!["scoped"]);

    loggers::builder()
        .with_backend(BackendKind::Log)
        .init()
        .expect("log init with a subscriber already installed");
    global::warn(&values!["after log init"]);

    let out = buf.contents();
    assert!(out.contains("after tracing init"), "output: {}", out);
    assert!(out.contains("scoped"), "output: {}", out);
    assert!(out.contains("user=bob"), "output: {}", out);
    assert!(out.contains("after log init"), "output: {}", out);
}
