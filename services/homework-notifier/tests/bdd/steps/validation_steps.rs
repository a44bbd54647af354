//! BDD step definitions for response validation

use cucumber::{given, then, when};
use homework_notifier::homework::check_response;

use crate::world::{error_kind, NotifierWorld};

#[given(expr = "an API response {string}")]
fn api_response(world: &mut NotifierWorld, body: String) {
    let value = serde_json::from_str(&body).expect("feature file JSON must parse");
    world.response = Some(value);
}

#[when("the response is validated")]
fn validate(world: &mut NotifierWorld) {
    let response = world.response.as_ref().expect("response not set");
    world.validation = Some(check_response(response).map(|records| records.len()));
}

#[then(expr = "validation fails with {word}")]
fn validation_fails(world: &mut NotifierWorld, kind: String) {
    match world.validation.as_ref().expect("no validation result") {
        Ok(count) => panic!("expected {kind}, validation passed with {count} records"),
        Err(e) => assert_eq!(error_kind(e), kind),
    }
}

#[then(expr = "validation yields {int} homework record(s)")]
fn validation_yields(world: &mut NotifierWorld, expected: usize) {
    match world.validation.as_ref().expect("no validation result") {
        Ok(count) => assert_eq!(*count, expected),
        Err(e) => panic!("expected success, got {e:?}"),
    }
}
