//! Text normalisation shared by entity constructors.

/// Trims optional free text; blank values are stored as absent.
pub(crate) fn normalise_optional(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
