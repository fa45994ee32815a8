//! Lookup failures
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown status code {0}")]
    UnknownCode(i32),

    #[error("unknown status name `{0}`")]
    UnknownName(String),
}
