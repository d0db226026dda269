//! Tennis string validation and normalisation.

use crate::domain::text::normalise_optional;

use super::{StringStatus, TennisString, TennisStringDraft, TennisStringValidationError};

impl TryFrom<TennisStringDraft> for TennisString {
    type Error = TennisStringValidationError;

    fn try_from(value: TennisStringDraft) -> Result<Self, Self::Error> {
        let brand = value.brand.trim();
        if brand.is_empty() {
            return Err(TennisStringValidationError::BlankBrand);
        }
        let model = value.model.trim();
        if model.is_empty() {
            return Err(TennisStringValidationError::BlankModel);
        }

        validate_tension(value.main_tension, "mainTension")?;
        validate_tension(value.cross_tension, "crossTension")?;
        validate_lifecycle_dates(&value)?;

        Ok(Self {
            id: value.id,
            owner_id: value.owner_id,
            brand: brand.to_owned(),
            model: model.to_owned(),
            gauge: normalise_optional(value.gauge),
            string_type: value.string_type,
            main_tension: value.main_tension,
            cross_tension: value.cross_tension,
            status: value.status,
            date_strung: value.date_strung,
            date_removed: value.date_removed,
            notes: normalise_optional(value.notes),
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

fn validate_tension(
    tension: Option<u32>,
    field: &'static str,
) -> Result<(), TennisStringValidationError> {
    if tension == Some(0) {
        return Err(TennisStringValidationError::NonPositiveTension { field });
    }
    Ok(())
}

fn validate_lifecycle_dates(draft: &TennisStringDraft) -> Result<(), TennisStringValidationError> {
    match (draft.status, draft.date_strung, draft.date_removed) {
        (StringStatus::Inventory, Some(_), _) => {
            Err(TennisStringValidationError::UnexpectedDateStrung)
        }
        (StringStatus::Strung | StringStatus::Removed, None, _) => {
            Err(TennisStringValidationError::MissingDateStrung {
                status: draft.status,
            })
        }
        (StringStatus::Inventory | StringStatus::Strung, _, Some(_)) => {
            Err(TennisStringValidationError::UnexpectedDateRemoved {
                status: draft.status,
            })
        }
        (StringStatus::Removed, _, None) => Err(TennisStringValidationError::MissingDateRemoved),
        _ => Ok(()),
    }
}

