//! Message dispatch.
//!
//! A message is a JSON envelope naming a command and carrying its arguments
//! as still-encoded payload strings. The number of payloads the dispatcher
//! reads depends on the handler's declared arity:
//!
//! | arity | fields read           |
//! |-------|-----------------------|
//! | 0     | none                  |
//! | 1     | `parameters`          |
//! | 2     | `param1`, `param2`    |
//!
//! Other fields are ignored. Payloads are decoded against the handler's
//! declared parameter types before the handler runs:
//!
//! ```text
//! {"command":"ShowStatus"}
//! {"command":"SetPaused","parameters":"true"}
//! {"command":"AwardPoints","param1":"\"alice\"","param2":"25"}
//! ```
//!
//! Every failure is returned as a [`DispatchError`] and reported to the
//! configured [`DispatchReporter`].

mod dispatcher;
mod envelope;
mod errors;
mod reporter;
mod shape;

pub use self::dispatcher::{Dispatched, Dispatcher};
pub use self::envelope::{ArgumentSlot, Envelope};
pub use self::errors::{DispatchError, ErrorKind};
pub use self::reporter::{DispatchReporter, StructuredDispatchReporter};
pub use self::shape::is_plausible_json_root;
