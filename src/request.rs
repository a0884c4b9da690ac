//! JSON job requests
//!
//! A request names the tab-delimited input files and the job options. Requests are validated
//! against an embedded JSON schema before they're deserialised.

/// Compile the embedded request schema
pub mod schema;
/// Read, validate and load a request
pub mod message;

pub use message::{JobInputs, JobRequest, Message};
