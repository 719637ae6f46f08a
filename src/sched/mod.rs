//! Cooperative timers for the single-threaded event loop
//!
//! A deterministic timer queue plus the cancellation-token tree it checks,
//! and the solution-overlay cycler built on top of both.

mod cycler;
mod scheduler;
mod token;

pub use cycler::{CycleEvent, SolutionCycler};
pub use scheduler::Scheduler;
pub use token::CancelToken;
