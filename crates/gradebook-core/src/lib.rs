//! gradebook-core — Student records, flat-file codec, and record store.
//!
//! This crate defines the record model, the line codec for the backing file,
//! the store that owns and persists the collection, and the statistics the
//! CLI reports on.

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod statistics;
pub mod store;

pub use error::{DecodeError, StoreError, ValidationError};
pub use model::{Grade, Record, RecordSummary, RecordUpdate, SortOrder};
pub use store::Store;
