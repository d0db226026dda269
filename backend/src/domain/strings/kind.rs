//! String material and lifecycle status enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Material category of a string setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringType {
    Polyester,
    Multifilament,
    SyntheticGut,
    NaturalGut,
    Hybrid,
}

impl StringType {
    /// Stable snake_case label, shared by serde and persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polyester => "polyester",
            Self::Multifilament => "multifilament",
            Self::SyntheticGut => "synthetic_gut",
            Self::NaturalGut => "natural_gut",
            Self::Hybrid => "hybrid",
        }
    }
}

/// Error returned when parsing a string type from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStringTypeError;

impl fmt::Display for StringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseStringTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid string type")
    }
}

impl std::error::Error for ParseStringTypeError {}

impl FromStr for StringType {
    type Err = ParseStringTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "polyester" => Ok(Self::Polyester),
            "multifilament" => Ok(Self::Multifilament),
            "synthetic_gut" => Ok(Self::SyntheticGut),
            "natural_gut" => Ok(Self::NaturalGut),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(ParseStringTypeError),
        }
    }
}

/// Lifecycle stage of a string setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringStatus {
    /// In the bag, not yet on a racquet.
    Inventory,
    /// Currently on a racquet.
    Strung,
    /// Was strung, now taken off.
    Removed,
}

impl StringStatus {
    /// Stable snake_case label, shared by serde and persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Strung => "strung",
            Self::Removed => "removed",
        }
    }

    /// Two-state view: everything except `Removed` counts as active.
    ///
    /// # Examples
    /// ```
    /// use stringlog::domain::StringStatus;
    ///
    /// assert!(StringStatus::Inventory.is_active());
    /// assert!(!StringStatus::Removed.is_active());
    /// ```
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Removed)
    }
}

/// Error returned when parsing a string status from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStringStatusError;

impl fmt::Display for StringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseStringStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid string status")
    }
}

impl std::error::Error for ParseStringStatusError {}

impl FromStr for StringStatus {
    type Err = ParseStringStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "inventory" => Ok(Self::Inventory),
            "strung" => Ok(Self::Strung),
            "removed" => Ok(Self::Removed),
            _ => Err(ParseStringStatusError),
        }
    }
}
