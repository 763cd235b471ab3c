#![cfg(feature = "tracing")]
//! Tests for the `tracing` feature.
//!
//! Installs a counting subscriber and checks that growth, bulk mutation and
//! traversal with removal emit their events.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use arraykit::prelude::*;
use rstest::rstest;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

#[derive(Clone, Default)]
struct EventCounter {
    events: Arc<AtomicUsize>,
}

impl EventCounter {
    fn count(&self) -> usize {
        self.events.load(Ordering::SeqCst)
    }
}

impl Subscriber for EventCounter {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _attributes: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, _event: &Event<'_>) {
        self.events.fetch_add(1, Ordering::SeqCst);
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn count_events(operation: impl FnOnce()) -> usize {
    let counter = EventCounter::default();
    tracing::subscriber::with_default(counter.clone(), operation);
    counter.count()
}

#[rstest]
fn test_growth_emits_event() {
    let events = count_events(|| {
        let mut array: Array<i32> = Array::with_capacity(0);
        array.add(1);
    });
    assert_eq!(events, 1);
}

#[rstest]
fn test_add_within_capacity_is_silent() {
    let events = count_events(|| {
        let mut array: Array<i32> = Array::with_capacity(4);
        array.add(1);
    });
    assert_eq!(events, 0);
}

#[rstest]
fn test_bulk_mutation_emits_events() {
    let events = count_events(|| {
        let mut array = array![1, 2, 3];
        array.add_all([4]);
        assert_eq!(array.remove_all([1, 9]), 1);
    });
    // growth, add_all and remove_all
    assert_eq!(events, 3);
}

#[rstest]
fn test_traversal_removal_emits_events() {
    let events = count_events(|| {
        let mut source = array![1, 2, 3, 4];
        let mut destination: Vec<i32> = Vec::new();
        assert_eq!(source.remove_where(|value| *value == 1), 1);
        assert_eq!(source.transfer(&mut destination, |value| value % 2 == 0), 2);
    });
    assert_eq!(events, 2);
}
