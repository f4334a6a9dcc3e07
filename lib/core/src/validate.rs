//! Input validation for proximity queries and entry admission
//!
//! Fields are checked in declaration order and the first failure is returned.

use crate::coordinate::{Coordinate, RawValue};
use crate::entry::{EntryCandidate, NewEntry};
use crate::error::ValidationError;
use crate::page::{PageRequest, MAX_LIMIT};

/// Coerce and range-check a raw latitude/longitude pair
pub fn validate(raw_latitude: &RawValue, raw_longitude: &RawValue) -> Result<Coordinate, ValidationError> {
    let latitude = raw_latitude
        .to_number("latitude")?
        .ok_or_else(|| ValidationError::required("latitude"))?;
    let longitude = raw_longitude
        .to_number("longitude")?
        .ok_or_else(|| ValidationError::required("longitude"))?;
    Coordinate::new(latitude, longitude)
}

/// Validate an admission request. Name and address are returned trimmed.
pub fn validate_entry(candidate: &EntryCandidate) -> Result<NewEntry, ValidationError> {
    let name = required_text("name", candidate.name.as_deref())?;
    let address = required_text("address", candidate.address.as_deref())?;
    let coordinate = validate(&candidate.latitude, &candidate.longitude)?;
    Ok(NewEntry {
        name,
        address,
        coordinate,
    })
}

/// Validate optional page/limit query parameters. Absent or blank values stay `None`.
pub fn validate_paging(raw_page: &RawValue, raw_limit: &RawValue) -> Result<PageRequest, ValidationError> {
    let page = positive_integer("page", raw_page, None)?;
    let limit = positive_integer("limit", raw_limit, Some(MAX_LIMIT))?;
    Ok(PageRequest { page, limit })
}

fn required_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(ValidationError::required(field)),
    }
}

fn positive_integer(
    field: &'static str,
    raw: &RawValue,
    max: Option<usize>,
) -> Result<Option<usize>, ValidationError> {
    let Some(n) = raw.to_number(field)? else {
        return Ok(None);
    };
    // pages past the end are valid and come back empty
    let upper = max.map_or(f64::INFINITY, |m| m as f64);
    if n.fract() != 0.0 || n < 1.0 || n > upper {
        let message = match max {
            Some(m) => format!("{} must be an integer between 1 and {}", field, m),
            None => format!("{} must be a positive integer", field),
        };
        return Err(ValidationError::out_of_range(field, message));
    }
    Ok(Some(n as usize))
}
