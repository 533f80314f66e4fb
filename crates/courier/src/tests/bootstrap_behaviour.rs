//! Behavioural tests for the bootstrap sequence.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use courier_config::Config;

use crate::bootstrap::StaticConfigLoader;
use crate::dispatch::DispatchError;

use super::support::{self, CourierWorld, FailingConfigLoader};

#[fixture]
fn world() -> RefCell<CourierWorld> {
    support::world()
}

#[given("a configuration with a payload preview of {chars} characters")]
fn given_preview_configuration(world: &RefCell<CourierWorld>, chars: usize) {
    let config = Config {
        payload_preview_chars: chars,
        ..Config::default()
    };
    world
        .borrow_mut()
        .use_loader(StaticConfigLoader::new(config));
}

#[given("a failing configuration loader")]
fn given_failing_loader(world: &RefCell<CourierWorld>) {
    world.borrow_mut().use_loader(FailingConfigLoader);
}

#[when("the courier bootstrap runs")]
fn when_bootstrap_runs(world: &RefCell<CourierWorld>) {
    world.borrow_mut().bootstrap();
}

#[when("the demo commands are registered with the courier")]
fn when_demo_commands_registered(world: &RefCell<CourierWorld>) {
    world.borrow().register_demo_commands();
}

#[then("bootstrap succeeds")]
fn then_bootstrap_succeeds(world: &RefCell<CourierWorld>) {
    let world = world.borrow();
    assert!(
        world.bootstrap_error().is_none(),
        "bootstrap error: {:?}",
        world.bootstrap_error()
    );
    assert!(world.courier().is_some(), "courier should have been built");
}

#[then("bootstrap fails")]
fn then_bootstrap_fails(world: &RefCell<CourierWorld>) {
    let world = world.borrow();
    assert!(world.courier().is_none(), "bootstrap succeeded unexpectedly");
    assert!(world.bootstrap_error().is_some());
}

#[then("the courier registry is empty")]
fn then_courier_registry_empty(world: &RefCell<CourierWorld>) {
    let world = world.borrow();
    let courier = world.courier().expect("bootstrapped courier");
    assert!(courier.registry().is_empty());
    assert_eq!(courier.config().payload_preview_chars(), 4);
}

#[then("the error shows the payload {preview}")]
fn then_error_preview(world: &RefCell<CourierWorld>, preview: String) {
    let world = world.borrow();
    let outcome = world.outcome.as_ref().expect("a message was dispatched");
    let Err(DispatchError::ArgumentDecode { payload, .. }) = outcome else {
        panic!("expected an argument decode failure, got {outcome:?}");
    };
    assert_eq!(payload, preview.trim_matches('"'));
}

#[scenario(path = "tests/features/bootstrap.feature")]
fn bootstrap_scenarios(#[from(world)] world: RefCell<CourierWorld>) {
    drop(world);
}
