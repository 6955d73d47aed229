#![cfg(feature = "trace")]

use carve::basic::traced;
use carve::complete::{alpha1, digit1};
use carve::prelude::*;
use carve::Cause;
use pretty_assertions::assert_eq;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

type Res<'a, T> = PResult<T, &'a str, Cause<&'a str>>;

#[derive(Default)]
struct Message(String);

impl Visit for Message {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn record<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.0
            .lock()
            .unwrap()
            .push(format!("span {}", attrs.metadata().name()));
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = Message::default();
        event.record(&mut message);
        self.0.lock().unwrap().push(message.0);
    }
}

#[test]
fn traced_reports_each_outcome() {
    fn word(input: &str) -> Res<'_, &str> {
        traced("word", alpha1).parse(input)
    }

    let recorder = Recorder::default();
    recorder.record(|| {
        assert_eq!(word("ab1"), Ok(Success("ab", "1")));
        assert!(word("1").is_err());
    });

    assert_eq!(
        recorder.lines(),
        ["span parse", "matched", "span parse", "no match"]
    );
}

#[test]
fn alt_logs_backtracking_and_exhaustion() {
    fn token(input: &str) -> Res<'_, &str> {
        alt!(alpha1, digit1).parse(input)
    }

    let recorder = Recorder::default();
    recorder.record(|| {
        assert_eq!(token("12"), Ok(Success("12", "")));
    });
    assert_eq!(recorder.lines(), ["alternative failed, backtracking"]);

    let recorder = Recorder::default();
    recorder.record(|| {
        assert!(token("+").is_err());
    });
    assert!(recorder
        .lines()
        .contains(&String::from("all alternatives failed")));
}
