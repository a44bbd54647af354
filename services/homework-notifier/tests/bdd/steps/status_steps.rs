//! BDD step definitions for status extraction

use cucumber::{given, then, when};
use homework_notifier::homework::parse_status;

use crate::world::{error_kind, NotifierWorld};

#[given(expr = "a homework record {string}")]
fn homework_record(world: &mut NotifierWorld, record: String) {
    let value = serde_json::from_str(&record).expect("feature file JSON must parse");
    world.homework = Some(value);
}

#[when("the status is extracted")]
fn extract(world: &mut NotifierWorld) {
    let homework = world.homework.as_ref().expect("homework not set");
    world.parsed = Some(parse_status(homework));
}

#[then(expr = "the message is {string}")]
fn message_is(world: &mut NotifierWorld, expected: String) {
    match world.parsed.as_ref().expect("no extraction result") {
        Ok(message) => assert_eq!(message, &expected),
        Err(e) => panic!("expected a message, got {e:?}"),
    }
}

#[then(expr = "extraction fails with {word}")]
fn extraction_fails(world: &mut NotifierWorld, kind: String) {
    match world.parsed.as_ref().expect("no extraction result") {
        Ok(message) => panic!("expected {kind}, got message {message}"),
        Err(e) => assert_eq!(error_kind(e), kind),
    }
}
