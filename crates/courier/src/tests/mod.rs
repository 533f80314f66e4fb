//! Behavioural test suites for the courier crate.

mod bootstrap_behaviour;
mod dispatch_behaviour;
mod support;
