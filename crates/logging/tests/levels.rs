// crates/logging/tests/levels.rs
use logging::{LogFormat, SubscriberConfig, subscriber};
use tracing::Level;
use tracing::subscriber::with_default;

fn sub(format: LogFormat, verbose: u8, quiet: bool) -> Box<dyn tracing::Subscriber + Send + Sync> {
    let cfg = SubscriberConfig::builder()
        .format(format)
        .verbose(verbose)
        .quiet(quiet)
        .colored(false)
        .build();
    subscriber(cfg).unwrap()
}

#[test]
fn info_not_emitted_by_default() {
    with_default(sub(LogFormat::Text, 0, false), || {
        assert!(tracing::enabled!(Level::WARN));
        assert!(!tracing::enabled!(Level::INFO));
    });
}

#[test]
fn verbose_enables_info() {
    with_default(sub(LogFormat::Text, 1, false), || {
        assert!(tracing::enabled!(Level::INFO));
        assert!(!tracing::enabled!(Level::DEBUG));
    });
}

#[test]
fn debug_with_two_v() {
    with_default(sub(LogFormat::Text, 2, false), || {
        assert!(tracing::enabled!(Level::DEBUG));
    });
}

#[test]
fn trace_with_three_v() {
    with_default(sub(LogFormat::Text, 3, false), || {
        assert!(tracing::enabled!(Level::TRACE));
    });
}

#[test]
fn quiet_overrides_verbose() {
    with_default(sub(LogFormat::Text, 3, true), || {
        assert!(tracing::enabled!(Level::ERROR));
        assert!(!tracing::enabled!(Level::WARN));
    });
}

#[test]
fn json_verbose_enables_info() {
    with_default(sub(LogFormat::Json, 1, false), || {
        assert!(tracing::enabled!(Level::INFO));
    });
}
