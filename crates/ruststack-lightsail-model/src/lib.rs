//! Lightsail model types for RustStack.
//!
//! This crate provides the Lightsail API shapes needed for the RustStack
//! Lightsail implementation. Lightsail speaks the AWS JSON 1.1 protocol
//! (camelCase members, epoch-second timestamps, `X-Amz-Target` dispatch),
//! so like the DynamoDB model crate these types are hand-written serde
//! shapes rather than Smithy-generated code.
// "Lightsail" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{LightsailError, LightsailErrorCode};
pub use operations::LightsailOperation;
