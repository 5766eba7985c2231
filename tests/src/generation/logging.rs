use std::io;
use std::sync::{Arc, Mutex};

use dnscewl_common::{Config, WordSources};
use dnscewl_core::engine;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(max_level: Level, f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn debug_diagnostics_follow_the_scoped_subscriber() {
    let sources = WordSources::new(["localhost"]).with_append(["x"]);
    let logs = capture_logs(Level::DEBUG, || {
        let report = engine::generate(&sources, &Config::default(), io::sink()).unwrap();
        assert!(report.results.is_empty());
    });

    assert!(logs.contains("Processing append rule."), "{logs}");
    assert!(logs.contains("No split point in localhost"), "{logs}");
}

#[test]
fn info_level_suppresses_debug_diagnostics() {
    let sources = WordSources::new(["example.com"]).with_prepend(["x"]);
    let logs = capture_logs(Level::INFO, || {
        engine::generate(&sources, &Config::default(), io::sink()).unwrap();
    });

    assert!(!logs.contains("Processing"), "{logs}");
}

#[test]
fn conflicting_word_lists_are_warned_about() {
    let sources = WordSources::new(["example.com"])
        .with_append(["a"])
        .with_prepend(["p"]);
    let logs = capture_logs(Level::WARN, || {
        engine::generate(&sources, &Config::default(), io::sink()).unwrap();
    });

    assert!(logs.contains("prepend words are ignored"), "{logs}");
}
