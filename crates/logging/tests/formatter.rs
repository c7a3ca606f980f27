// crates/logging/tests/formatter.rs
use logging::ScanFormatter;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, registry};

#[derive(Clone, Default)]
struct VecWriter(Arc<Mutex<Vec<u8>>>);

struct VecWriterGuard(Arc<Mutex<Vec<u8>>>);

impl Write for VecWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> fmt::writer::MakeWriter<'a> for VecWriter {
    type Writer = VecWriterGuard;
    fn make_writer(&'a self) -> Self::Writer {
        VecWriterGuard(self.0.clone())
    }
}

fn capture(width: usize, f: impl FnOnce()) -> String {
    let writer = VecWriter::default();
    let layer = fmt::layer()
        .event_format(ScanFormatter::new(false).with_width(width))
        .with_ansi(false)
        .with_writer(writer.clone());
    let subscriber = registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = writer.0.lock().unwrap().clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn wraps_at_width() {
    let out = capture(40, || {
        info!(target: "test", "this is a very long line that should wrap around to the next line when the terminal width is small");
    });
    assert_eq!(
        out,
        "this is a very long line that should\n\
         wrap around to the next line when the\n\
         terminal width is small\n"
    );
}

#[test]
fn fields_follow_message() {
    let out = capture(200, || {
        info!(target: "walk", files = 2, pruned = 1, "walk done");
    });
    assert_eq!(out, "walk done files=2 pruned=1\n");
}

#[test]
fn warnings_are_tagged() {
    let out = capture(200, || {
        warn!(target: "ignore", "bad entry");
    });
    assert_eq!(out, "warning: bad entry\n");
}
