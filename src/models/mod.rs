//! Simulation domain models.
//!
//! Provides the data types exchanged with the engine: process definitions
//! going in, completed-process records and CPU timelines coming out.
//!
//! # Lifecycle
//!
//! | Type | Owner | Mutability |
//! |------|-------|-----------|
//! | `ProcessSpec` | Caller | Immutable input |
//! | `ProcessState` | Engine | Mutated during the run |
//! | `CompletedProcess` | Caller | Immutable output |
//! | `Workload` | Caller | Serializable input bundle |

mod process;
mod record;
mod workload;

pub use process::{ProcessSpec, ProcessState};
pub use record::{timeline, CompletedProcess, ExecutionInterval, TimelineSlice};
pub use workload::Workload;
