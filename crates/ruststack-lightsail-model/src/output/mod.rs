//! Lightsail output types, grouped by resource domain.
//!
//! All output structs use `camelCase` JSON member naming to match the
//! Lightsail wire protocol (`awsJson1_1`). Every member is `Option` and
//! omitted when absent, so responses round-trip without inventing fields.
//! Mutating operations report their progress as a list of asynchronous
//! [`Operation`](crate::types::Operation) records.

pub mod alarm;
pub mod catalog;
pub mod database;
pub mod disk;
pub mod instance;
pub mod operation;
pub mod snapshot;

pub use alarm::*;
pub use catalog::*;
pub use database::*;
pub use disk::*;
pub use instance::*;
pub use operation::*;
pub use snapshot::*;
