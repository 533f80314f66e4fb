//! Demo commands registered by scenarios.
//!
//! Each handler appends a one-line rendering of its call to a shared log so
//! steps can assert on what ran and with which arguments.

use std::sync::{Arc, Mutex};

use serde::Deserialize;

use crate::decode::{RecordDescriptor, TypeDescriptor, Value};
use crate::handler::{Handler, HandlerError, Parameter};
use crate::registry::CommandRegistry;

/// Shared call log written by demo handlers.
pub type CallLog = Arc<Mutex<Vec<String>>>;

#[derive(Debug, Deserialize)]
struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Parameter for Point {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::record(
            RecordDescriptor::new("Point")
                .field("x", 0.0)
                .field("y", 0.0)
                .field("z", 0.0),
        )
    }

    fn from_value(value: Value) -> Result<Self, String> {
        from_record(value)
    }
}

#[derive(Debug, Deserialize)]
struct Reward {
    points: i64,
    reward_type: String,
    reason: String,
}

impl Parameter for Reward {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::record(
            RecordDescriptor::new("Reward")
                .field("points", 0)
                .field("reward_type", "default")
                .field("reason", "No reason specified"),
        )
    }

    fn from_value(value: Value) -> Result<Self, String> {
        from_record(value)
    }
}

fn from_record<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, String> {
    match value {
        Value::Record(record) => record.deserialize().map_err(|error| error.to_string()),
        other => Err(format!("expected a record, found {}", other.type_name())),
    }
}

fn push(log: &CallLog, entry: String) {
    log.lock().expect("call log mutex poisoned").push(entry);
}

/// Registers the demo command set against `registry`.
pub fn register_demo_commands(registry: &CommandRegistry, log: &CallLog) {
    let entries: Vec<(&str, Handler)> = vec![
        ("ShowStatus", {
            let log = Arc::clone(log);
            Handler::nullary(move || {
                push(&log, "ShowStatus()".to_owned());
                Ok(())
            })
        }),
        ("AwardPoints", {
            let log = Arc::clone(log);
            Handler::unary(move |points: i64| {
                push(&log, format!("AwardPoints({points})"));
                Ok(())
            })
        }),
        ("MovePlayer", {
            let log = Arc::clone(log);
            Handler::unary(move |to: Point| {
                push(&log, format!("MovePlayer({}, {}, {})", to.x, to.y, to.z));
                Ok(())
            })
        }),
        ("TriggerEffect", {
            let log = Arc::clone(log);
            Handler::binary(move |at: Point, effect: String| {
                push(
                    &log,
                    format!("TriggerEffect({}, {}, {}, {effect})", at.x, at.y, at.z),
                );
                Ok(())
            })
        }),
        ("GrantReward", {
            let log = Arc::clone(log);
            Handler::binary(move |player: String, reward: Reward| {
                push(
                    &log,
                    format!(
                        "GrantReward({player}, {}, {}, {})",
                        reward.points, reward.reward_type, reward.reason
                    ),
                );
                Ok(())
            })
        }),
        ("SetPaused", {
            let log = Arc::clone(log);
            Handler::unary(move |paused: bool| {
                push(&log, format!("SetPaused({paused})"));
                Ok(())
            })
        }),
        ("Explode", Handler::nullary(|| Err(HandlerError::failed("kaboom")))),
    ];

    for (name, handler) in entries {
        registry.register(name, handler).expect("register demo command");
    }
}

/// Builds a nullary handler that logs `label` when run.
pub fn labelled(log: &CallLog, label: &str) -> Handler {
    let log = Arc::clone(log);
    let label = label.to_owned();
    Handler::nullary(move || {
        push(&log, label.clone());
        Ok(())
    })
}
