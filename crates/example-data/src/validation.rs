//! Label and rating validation mirroring backend constraints.
//!
//! Keeping these rules in sync with the backend's tennis string and session
//! constructors ensures generated data is always accepted when consumed.
//!
//! # Validation Rules
//!
//! - Labels (brand, model, gauge, location) must not be blank
//! - Labels are at most [`LABEL_MAX`] characters
//! - Labels must not contain control characters
//! - Feeling ratings lie within [`FEELING_RATING_MIN`]..=[`FEELING_RATING_MAX`]

/// Maximum allowed length for a descriptive label.
pub const LABEL_MAX: usize = 64;

/// Lowest feeling rating accepted by the backend.
pub const FEELING_RATING_MIN: u8 = 1;

/// Highest feeling rating accepted by the backend.
pub const FEELING_RATING_MAX: u8 = 10;

/// Validates a descriptive label against backend constraints.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_label;
///
/// assert!(is_valid_label("Luxilon"));
/// assert!(is_valid_label("ALU Power 125"));
/// assert!(!is_valid_label("   "));          // Whitespace-only
/// assert!(!is_valid_label("tab\there"));    // Control character
/// ```
#[must_use]
pub fn is_valid_label(label: &str) -> bool {
    if label.trim().is_empty() {
        return false;
    }
    if label.chars().count() > LABEL_MAX {
        return false;
    }
    !label.chars().any(char::is_control)
}

/// Returns `true` when the rating lies within the accepted range.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_feeling_rating;
///
/// assert!(is_valid_feeling_rating(7));
/// assert!(!is_valid_feeling_rating(0));
/// assert!(!is_valid_feeling_rating(11));
/// ```
#[must_use]
pub const fn is_valid_feeling_rating(rating: u8) -> bool {
    rating >= FEELING_RATING_MIN && rating <= FEELING_RATING_MAX
}

/// Replaces control characters with spaces and trims the result.
#[must_use]
pub(crate) fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_owned()
}
