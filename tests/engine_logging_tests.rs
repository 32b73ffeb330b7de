//! Tests for the tracing events emitted by the executor.
//!
//! ## Test Organization
//!
//! 1. **Capture Layer** - Records events from a scoped subscriber
//! 2. **Degeneracy Warnings** - One warning per flagged interval under `Warn`
//! 3. **Silent Policies** - No warnings under `Ignore` or `Reject`

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use findiff_rs::prelude::*;

// ============================================================================
// Capture Layer
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    target: String,
    index: Option<u64>,
    message: String,
}

#[derive(Default)]
struct EventFields {
    index: Option<u64>,
    message: String,
}

impl Visit for EventFields {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "index" {
            self.index = Some(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            index: fields.index,
            message: fields.message,
        });
    }
}

/// Run `f` under a subscriber that records every event.
fn capture_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);

    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);

    let captured = events.lock().unwrap().clone();
    captured
}

fn warnings(events: &[CapturedEvent]) -> Vec<&CapturedEvent> {
    events.iter().filter(|e| e.level == Level::WARN).collect()
}

/// Two near-coinciding pairs: intervals 1 and 5.
fn doubly_clustered_grid() -> (Vec<f64>, Vec<f64>) {
    let x = vec![0.0, 0.25, 0.25 + 1e-11, 0.5, 0.75, 0.75 + 1e-11, 1.0];
    let f: Vec<f64> = x.iter().map(|v| v * v).collect();
    (x, f)
}

type PolicyRun = (Result<DerivativeResult<f64>, FdError>, Vec<CapturedEvent>);

fn run_with_policy(policy: DegeneracyPolicy) -> PolicyRun {
    let (x, f) = doubly_clustered_grid();
    let model = Fd2::new()
        .spacing_tolerance(1e-8)
        .degeneracy_policy(policy)
        .adapter(Batch)
        .build()
        .unwrap();

    let mut result = None;
    let events = capture_events(|| result = Some(model.differentiate(&x, &f)));
    (result.unwrap(), events)
}

// ============================================================================
// Degeneracy Warning Tests
// ============================================================================

#[test]
fn test_warn_policy_emits_one_warning_per_interval() {
    let (result, events) = run_with_policy(Warn);
    let result = result.unwrap();
    assert_eq!(result.degenerate_nodes, Some(vec![1, 5]));

    let warned = warnings(&events);
    assert_eq!(warned.len(), 2, "{:?}", events);

    let indices: Vec<Option<u64>> = warned.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![Some(1), Some(5)]);

    for event in &warned {
        assert_eq!(event.target, "findiff::executor");
        assert!(event.message.contains("near-degenerate"), "{}", event.message);
    }
}

#[test]
fn test_every_run_emits_debug_event() {
    let (result, events) = run_with_policy(Warn);
    assert!(result.is_ok());

    let debug: Vec<&CapturedEvent> = events
        .iter()
        .filter(|e| e.level == Level::DEBUG)
        .collect();
    assert_eq!(debug.len(), 1, "{:?}", events);
    assert_eq!(debug[0].target, "findiff::executor");
}

// ============================================================================
// Silent Policy Tests
// ============================================================================

#[test]
fn test_ignore_policy_is_silent() {
    let (result, events) = run_with_policy(Ignore);
    assert_eq!(result.unwrap().degenerate_nodes, Some(vec![1, 5]));
    assert!(warnings(&events).is_empty(), "{:?}", events);
}

#[test]
fn test_reject_policy_fails_without_warning() {
    let (result, events) = run_with_policy(Reject);
    assert!(matches!(
        result,
        Err(FdError::DegenerateSpacing { index: 1, .. })
    ));
    assert!(warnings(&events).is_empty(), "{:?}", events);
}
