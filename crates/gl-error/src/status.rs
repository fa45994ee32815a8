//! Status vocabulary
//!
//! Every member carries a stable integer code and a message meant for display.
//! Codes are part of the public contract: callers may persist them, send them
//! over the wire or hand them to the OS as exit codes.

use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::process::ExitCode;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of status values
///
/// `Ok` is a member so the whole vocabulary lives in one type. Turn a status
/// into a `Result` with [`GlError::check`] instead of wrapping it in `Err`
/// by hand, which would let `Err(GlError::Ok)` through.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum GlError {
    /// Operation succeeded
    #[error("ok")]
    Ok,

    /// The requested configuration is not supported
    #[error("config not support")]
    ConfigErr,
}

impl GlError {
    /// All members, in declaration order
    pub const ALL: [GlError; 2] = [GlError::Ok, GlError::ConfigErr];

    /// Numeric code of this member
    pub const fn value(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::ConfigErr => 101,
        }
    }

    /// Human-readable message, not intended for machine parsing
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::ConfigErr => "config not support",
        }
    }

    /// Canonical member name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::ConfigErr => "ConfigErr",
        }
    }

    /// True only for `OK`
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Find the member whose code is `code`
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.value() == code)
    }

    /// Turn a failure member into an `Err` so it can travel with `?`
    pub fn check(self) -> Result<(), GlError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

// --- CONVERSIONS ---

impl From<GlError> for i32 {
    fn from(status: GlError) -> Self {
        status.value()
    }
}

impl TryFrom<i32> for GlError {
    type Error = LookupError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(LookupError::UnknownCode(code))
    }
}

impl FromStr for GlError {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LookupError::UnknownName(s.to_string()))
    }
}

/// Codes outside `0..=255` saturate to 255
impl From<GlError> for ExitCode {
    fn from(status: GlError) -> Self {
        ExitCode::from(u8::try_from(status.value()).unwrap_or(u8::MAX))
    }
}
