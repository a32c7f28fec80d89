//! Reporting core of the music tracker: resolves published lists, projects
//! album rankings and aggregates list statistics.
//!
//! The store is only ever read. Loaders in [`store`] pull a bounded working
//! set into memory and the functions in [`ranking`] and [`aggregate`] fold it.

pub mod aggregate;
pub mod error;
pub mod model;
pub mod ranking;
pub mod resolve;
pub mod service;
pub mod snapshot;
pub mod store;
pub mod year;

pub use error::{ReportError, Result};
pub use model::ListKind;
pub use year::Year;
