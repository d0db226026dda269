//! Tennis string setups and their lifecycle.
//!
//! A string setup moves through `Inventory`, `Strung` and `Removed`. The
//! lifecycle state machine is a pure function over the entity; persistence
//! and clock reads stay in the services that drive it.

use std::fmt;

mod kind;
mod lifecycle;
#[cfg(test)]
mod tests;
mod tennis_string;
mod validation;

pub use kind::{ParseStringStatusError, ParseStringTypeError, StringStatus, StringType};
pub use lifecycle::{LifecycleAction, LifecycleError};
pub use tennis_string::{TennisString, TennisStringDraft, TennisStringPatch};

/// Validation errors raised by tennis string constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TennisStringValidationError {
    BlankBrand,
    BlankModel,
    NonPositiveTension { field: &'static str },
    MissingDateStrung { status: StringStatus },
    UnexpectedDateStrung,
    MissingDateRemoved,
    UnexpectedDateRemoved { status: StringStatus },
}

impl TennisStringValidationError {
    /// Name of the violated field as exposed on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankBrand => "brand",
            Self::BlankModel => "model",
            Self::NonPositiveTension { field } => field,
            Self::MissingDateStrung { .. } | Self::UnexpectedDateStrung => "dateStrung",
            Self::MissingDateRemoved | Self::UnexpectedDateRemoved { .. } => "dateRemoved",
        }
    }
}

impl fmt::Display for TennisStringValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankBrand => write!(f, "string brand must not be blank"),
            Self::BlankModel => write!(f, "string model must not be blank"),
            Self::NonPositiveTension { field } => {
                write!(f, "string {field} must be a positive number of pounds")
            }
            Self::MissingDateStrung { status } => {
                write!(f, "a {status} string requires dateStrung")
            }
            Self::UnexpectedDateStrung => {
                write!(f, "an inventory string must not carry dateStrung")
            }
            Self::MissingDateRemoved => write!(f, "a removed string requires dateRemoved"),
            Self::UnexpectedDateRemoved { status } => {
                write!(f, "a {status} string must not carry dateRemoved")
            }
        }
    }
}

impl std::error::Error for TennisStringValidationError {}
