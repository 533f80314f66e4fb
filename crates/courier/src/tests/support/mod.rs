//! Test harness utilities shared by the behavioural suites.

mod commands;
mod config_loader;
mod reporter;
mod world;

pub use config_loader::FailingConfigLoader;
pub use world::{CourierWorld, world};
