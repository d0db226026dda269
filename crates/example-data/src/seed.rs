//! Generated seed types.
//!
//! This module defines the output types from dataset generation. These types
//! are independent of backend domain types to avoid circular dependencies.
//! Dates are expressed as whole-day offsets before "now" so the consumer can
//! anchor them against its own clock.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// String material category.
///
/// Mirrors the backend's `StringType` enum without creating a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringTypeSeed {
    /// Co-polyester monofilament.
    Polyester,
    /// Multifilament bundle.
    Multifilament,
    /// Synthetic gut.
    SyntheticGut,
    /// Natural (cow) gut.
    NaturalGut,
    /// Mixed mains and crosses.
    Hybrid,
}

/// Kind of playing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionTypeSeed {
    /// Drills or solo practice.
    Practice,
    /// Competitive match.
    Match,
    /// Coached lesson.
    Lesson,
    /// Tournament play.
    Tournament,
    /// Informal hitting.
    HittingSession,
}

/// Court surface a session was played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtSurfaceSeed {
    /// Acrylic hard court.
    HardCourt,
    /// Clay court.
    Clay,
    /// Grass court.
    Grass,
    /// Carpet court.
    Carpet,
    /// Indoor court.
    Indoor,
}

/// Lifecycle stage of a generated string, expressed as day offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum LifecycleStageSeed {
    /// Still in the bag, never strung.
    Inventory,
    /// Currently on a racquet.
    #[serde(rename_all = "camelCase")]
    Strung {
        /// Days before "now" the string was installed.
        strung_days_ago: u32,
    },
    /// Installed and later cut out.
    #[serde(rename_all = "camelCase")]
    Removed {
        /// Days before "now" the string was installed.
        strung_days_ago: u32,
        /// Days before "now" the string was removed.
        removed_days_ago: u32,
    },
}

impl LifecycleStageSeed {
    /// Returns the inclusive window of day offsets in which the string was on
    /// a racquet, as `(most_recent, oldest)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use example_data::LifecycleStageSeed;
    ///
    /// let stage = LifecycleStageSeed::Removed { strung_days_ago: 40, removed_days_ago: 10 };
    /// assert_eq!(stage.played_window(), Some((10, 40)));
    /// assert_eq!(LifecycleStageSeed::Inventory.played_window(), None);
    /// ```
    #[must_use]
    pub const fn played_window(&self) -> Option<(u32, u32)> {
        match *self {
            Self::Inventory => None,
            Self::Strung { strung_days_ago } => Some((0, strung_days_ago)),
            Self::Removed {
                strung_days_ago,
                removed_days_ago,
            } => Some((removed_days_ago, strung_days_ago)),
        }
    }
}

/// A generated string setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleStringSeed {
    /// Unique identifier for the string setup.
    pub id: Uuid,
    /// Manufacturer.
    pub brand: String,
    /// Product line.
    pub model: String,
    /// Optional gauge label.
    pub gauge: Option<String>,
    /// Material category.
    pub string_type: StringTypeSeed,
    /// Main tension in pounds.
    pub main_tension: Option<u32>,
    /// Cross tension in pounds.
    pub cross_tension: Option<u32>,
    /// Lifecycle stage with day offsets.
    pub stage: LifecycleStageSeed,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// A generated playing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSessionSeed {
    /// Unique identifier for the session.
    pub id: Uuid,
    /// Referenced string setup, if any.
    pub string_id: Option<Uuid>,
    /// Days before "now" the session took place.
    pub days_ago: u32,
    /// Kind of session.
    pub session_type: SessionTypeSeed,
    /// Duration in minutes; always positive.
    pub duration_minutes: u32,
    /// Where the session was played.
    pub location: Option<String>,
    /// Court surface.
    pub surface: Option<CourtSurfaceSeed>,
    /// Subjective string feel between 1 and 10.
    pub feeling_rating: Option<u8>,
    /// Notes about string behaviour.
    pub string_notes: Option<String>,
    /// General notes.
    pub notes: Option<String>,
}

/// A complete generated dataset for one demo owner.
///
/// # Example
///
/// ```
/// use example_data::ExampleDataset;
/// use uuid::Uuid;
///
/// let dataset = ExampleDataset {
///     owner_id: Uuid::nil(),
///     strings: vec![],
///     sessions: vec![],
/// };
///
/// assert!(dataset.strings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDataset {
    /// Owner that every generated record belongs to.
    pub owner_id: Uuid,
    /// Generated string setups.
    pub strings: Vec<ExampleStringSeed>,
    /// Generated sessions, in generation order.
    pub sessions: Vec<ExampleSessionSeed>,
}
