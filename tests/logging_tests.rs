use std::env;
use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::fmt;

use paramlog::logging;
use paramlog::sink::{LogSink, TracingSink};

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_default_filter_keeps_sink_lines_and_warnings() {
    env::remove_var("RUST_LOG");

    let captured = CaptureWriter::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(move || writer.clone()))
        .with(logging::env_filter());

    tracing::subscriber::with_default(subscriber, || {
        TracingSink.line("아이디: alice");
        tracing::warn!("user_pw values are written in clear text");
        tracing::debug!("hidden by default");
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("아이디: alice"), "sink line missing: {output}");
    assert!(output.contains("clear text"), "warning missing: {output}");
    assert!(!output.contains("hidden by default"));
}
