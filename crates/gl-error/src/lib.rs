//! GL Error: status codes with stable integer values
//!
//! A closed set of outcomes, each pairing a code with an operator-facing message.

pub mod error;
pub mod report;
pub mod status;

pub use error::LookupError;
pub use report::report;
pub use status::GlError;
