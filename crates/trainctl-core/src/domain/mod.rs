//! Domain model (handles, specs, outcomes, errors, states, events).

pub mod errors;
pub mod events;
pub mod ids;
pub mod outcome;
pub mod spec;
pub mod state;

pub use self::errors::{ErrorKind, QueryError, RequestFailure, StartError, StopError};
pub use self::events::HarnessEvent;
pub use self::ids::{EmptyTaskId, JobHandle};
pub use self::outcome::{HttpOutcome, ServiceStatus};
pub use self::spec::JobRequestSpec;
pub use self::state::{ScenarioName, ScenarioState};
