//! Session type and court surface enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What kind of play a session recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Practice,
    Match,
    Lesson,
    Tournament,
    HittingSession,
}

impl SessionType {
    /// Stable snake_case label, shared by serde and persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Practice => "practice",
            Self::Match => "match",
            Self::Lesson => "lesson",
            Self::Tournament => "tournament",
            Self::HittingSession => "hitting_session",
        }
    }
}

/// Court surface a session was played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtSurface {
    HardCourt,
    Clay,
    Grass,
    Carpet,
    Indoor,
}

impl CourtSurface {
    /// Stable snake_case label, shared by serde and persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HardCourt => "hard_court",
            Self::Clay => "clay",
            Self::Grass => "grass",
            Self::Carpet => "carpet",
            Self::Indoor => "indoor",
        }
    }
}

/// Error returned when parsing a session enumeration from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSessionKindError {
    value: String,
}

impl fmt::Display for ParseSessionKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised session label: {}", self.value)
    }
}

impl std::error::Error for ParseSessionKindError {}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CourtSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = ParseSessionKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "practice" => Ok(Self::Practice),
            "match" => Ok(Self::Match),
            "lesson" => Ok(Self::Lesson),
            "tournament" => Ok(Self::Tournament),
            "hitting_session" => Ok(Self::HittingSession),
            other => Err(ParseSessionKindError {
                value: other.to_owned(),
            }),
        }
    }
}

impl FromStr for CourtSurface {
    type Err = ParseSessionKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "hard_court" => Ok(Self::HardCourt),
            "clay" => Ok(Self::Clay),
            "grass" => Ok(Self::Grass),
            "carpet" => Ok(Self::Carpet),
            "indoor" => Ok(Self::Indoor),
            other => Err(ParseSessionKindError {
                value: other.to_owned(),
            }),
        }
    }
}
