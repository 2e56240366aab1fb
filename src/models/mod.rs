//! CPU scheduling domain models.
//!
//! Provides the input and output data types shared by every
//! scheduling discipline: the immutable `Process` record and the
//! `Schedule` timeline it produces. Derived metric types live in
//! `scheduler::metrics`, next to the aggregation logic.

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{Schedule, ScheduleEntry};
