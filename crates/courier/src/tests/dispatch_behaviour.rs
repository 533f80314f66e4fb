//! Behavioural tests for envelope dispatch.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use super::support::{self, CourierWorld};

#[fixture]
fn world() -> RefCell<CourierWorld> {
    support::world()
}

#[given("the demo commands are registered")]
fn given_demo_commands(world: &RefCell<CourierWorld>) {
    world.borrow().register_demo_commands();
}

#[when("the message {message} is dispatched")]
fn when_message_dispatched(world: &RefCell<CourierWorld>, message: String) {
    world.borrow_mut().dispatch(message.trim_matches('\''));
}

#[then("the dispatch succeeds")]
fn then_dispatch_succeeds(world: &RefCell<CourierWorld>) {
    let world = world.borrow();
    let outcome = world.outcome.as_ref().expect("a message was dispatched");
    assert!(outcome.is_ok(), "dispatch failed: {outcome:?}");
}

#[then("the dispatch fails with {kind}")]
fn then_dispatch_fails(world: &RefCell<CourierWorld>, kind: String) {
    let world = world.borrow();
    let outcome = world.outcome.as_ref().expect("a message was dispatched");
    let error = outcome.as_ref().expect_err("dispatch should have failed");
    assert_eq!(error.kind().as_str(), kind.trim(), "unexpected error: {error}");
}

#[then("the call log is {entry}")]
fn then_call_log(world: &RefCell<CourierWorld>, entry: String) {
    assert_eq!(world.borrow().calls(), vec![entry.trim_matches('"').to_owned()]);
}

#[then("no handler ran")]
fn then_no_handler_ran(world: &RefCell<CourierWorld>) {
    let calls = world.borrow().calls();
    assert!(calls.is_empty(), "unexpected calls: {calls:?}");
}

#[then("the handler ran {count} times")]
fn then_handler_ran(world: &RefCell<CourierWorld>, count: usize) {
    assert_eq!(world.borrow().calls().len(), count);
}

#[then("the reporter recorded {count} failures")]
fn then_reporter_failures(world: &RefCell<CourierWorld>, count: usize) {
    let world = world.borrow();
    assert_eq!(
        world.reporter.failures(),
        count,
        "events: {:?}",
        world.reporter.events()
    );
}

#[scenario(path = "tests/features/dispatch.feature")]
fn dispatch_scenarios(#[from(world)] world: RefCell<CourierWorld>) {
    drop(world);
}
