//! Tests for utility functions

use prometheus_turnstile::util::{init_tracing, init_tracing_with_default, now_ms};

#[test]
fn test_now_ms_is_after_epoch() {
    let first = now_ms();
    let second = now_ms();
    assert!(first > 0);
    assert!(second >= first);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing_with_default("prometheus_turnstile=debug");
    assert!(tracing::dispatcher::has_been_set());

    // Later calls keep the installed subscriber and do not panic.
    init_tracing();
    init_tracing_with_default("prometheus_turnstile=trace");
    assert!(tracing::dispatcher::has_been_set());
}
