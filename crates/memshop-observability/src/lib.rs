//! Observability for the MemoryShop storefront.
//!
//! This crate provides:
//! - `logging` - `tracing` subscriber setup driven by `LogConfig`
//! - `SessionJournal` - an exportable record of what happened in a session

mod journal;
mod logging;

pub use journal::*;
pub use logging::*;
