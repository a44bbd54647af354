//! BDD step definitions for the polling loop

use std::sync::Arc;
use std::time::Duration;

use cucumber::{given, then, when};
use homework_notifier::engine::{Engine, PollState};
use homework_notifier::io::HttpResponse;
use homework_notifier::practicum::PracticumClient;
use tokio_util::sync::CancellationToken;

use crate::world::NotifierWorld;

const ENDPOINT: &str = "https://practicum.test/api/user_api/homework_statuses/";

#[given(expr = "the review API returns {string}")]
fn api_returns(world: &mut NotifierWorld, body: String) {
    api_returns_times(world, body, 1);
}

#[given(expr = "the review API returns {string} {int} times")]
fn api_returns_times(world: &mut NotifierWorld, body: String, times: usize) {
    for _ in 0..times {
        world.http.push_get(Ok(HttpResponse {
            status: 200,
            body: body.clone(),
        }));
    }
}

#[given(expr = "the review API answers with status {int} {int} times")]
fn api_status_times(world: &mut NotifierWorld, status: u16, times: usize) {
    for _ in 0..times {
        world.http.push_get(Ok(HttpResponse {
            status,
            body: String::new(),
        }));
    }
}

#[given(expr = "the notifier starts polling from {int}")]
fn start_polling(world: &mut NotifierWorld, from_date: i64) {
    let notifier = world
        .notifier
        .clone()
        .expect("a Telegram chat must be set up first");
    let source = Arc::new(PracticumClient::new(
        ENDPOINT,
        "practicum-token",
        world.http.clone(),
    ));
    world.engine = Some(Engine::new(
        source,
        notifier,
        Duration::from_secs(600),
        CancellationToken::new(),
    ));
    world.poll_state = PollState::new(from_date);
}

#[when(expr = "the notifier polls {int} time(s)")]
async fn poll(world: &mut NotifierWorld, times: usize) {
    let engine = world.engine.as_ref().expect("engine not started");
    for _ in 0..times {
        let outcome = engine.poll_once(&mut world.poll_state).await;
        world.outcomes.push(outcome);
    }
}

#[then(expr = "the chat received exactly {int} message(s)")]
fn chat_received_count(world: &mut NotifierWorld, expected: usize) {
    assert_eq!(world.http.texts().len(), expected, "{:?}", world.http.texts());
}

#[then(expr = "the last message is {string}")]
fn last_message(world: &mut NotifierWorld, expected: String) {
    let texts = world.http.texts();
    assert_eq!(texts.last(), Some(&expected));
}

#[then(expr = "the API was last queried with from_date {int}")]
fn last_from_date(world: &mut NotifierWorld, expected: i64) {
    let gets = world.http.gets();
    let last = gets.last().expect("API was never queried");
    assert_eq!(last.url, ENDPOINT);
    assert!(last
        .headers
        .contains(&("Authorization".to_string(), "OAuth practicum-token".to_string())));
    assert_eq!(
        last.query,
        vec![("from_date".to_string(), expected.to_string())]
    );
}

#[then("the notifier remembers the last status")]
fn remembers_status(world: &mut NotifierWorld) {
    assert!(world
        .poll_state
        .last_status_message
        .starts_with("Изменился статус проверки работы"));
}
