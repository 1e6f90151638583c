//! A trace-driven cache-replacement simulator.
//!
//! Replays a recorded stream of page accesses against a bounded cache under a
//! chosen replacement policy and reports how many requests missed.
//!
//! # Features
//! - **Classic policies**: FIFO, LIFO, LRU, LFU, Marking, and offline Belady
//!   OPT, all behind one [`Scheduler`] trait.
//! - **Learned policy**: [`policy::svm::SvmScheduler`] trains a per-page
//!   linear model online, supervised by a retrospective optimal-replacement
//!   oracle ([`policy::optgen::OptGen`]).
//! - **Deterministic**: one pass over the trace, strict input order, no
//!   shared mutable state. Run one scheduler instance per concurrent
//!   simulation if parallelism is wanted.
//! - **Serde**: optional `serde` feature derives `Serialize` for the
//!   request/report types.

pub mod error;
pub mod policy;
pub mod request;

// Re-export the primary user-facing types for convenience
pub use error::BuildError;
pub use policy::Scheduler;
pub use request::{Report, Request};
