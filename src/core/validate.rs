//! Validation & computation: raw form fields → `Record`.

use crate::errors::ValidationError;
use crate::models::{RawRecord, Record};
use crate::utils::date;
use crate::utils::number::{parse_non_negative, round2};
use chrono::{NaiveDateTime, SubsecRound};

/// Which fleet codes are accepted.
#[derive(Debug, Clone, Default)]
pub enum FleetPolicy {
    /// Any non-empty code.
    #[default]
    Any,
    /// Only the listed codes.
    Known(Vec<String>),
}

impl FleetPolicy {
    fn check(&self, fleet: &str) -> Result<(), ValidationError> {
        match self {
            FleetPolicy::Any => Ok(()),
            FleetPolicy::Known(list) if list.iter().any(|f| f == fleet) => Ok(()),
            FleetPolicy::Known(_) => Err(ValidationError::UnknownFleet(fleet.to_string())),
        }
    }
}

/// Build a record with any fleet allowed and the date defaulting to now.
pub fn validate_and_build(raw: &RawRecord) -> Result<Record, ValidationError> {
    validate_with(raw, &FleetPolicy::Any, date::now())
}

/// Rules, first failure wins:
/// 1. operator, fleet and both readings present and non-blank
/// 2. both readings are non-negative decimals
/// 3. final reading >= initial reading
/// 4. fleet accepted by `policy`
pub fn validate_with(
    raw: &RawRecord,
    policy: &FleetPolicy,
    now: NaiveDateTime,
) -> Result<Record, ValidationError> {
    let operator = required(&raw.operator, "operator")?;
    let fleet = required(&raw.fleet, "fleet")?;
    let initial_raw = required(&raw.initial_reading, "initial_reading")?;
    let final_raw = required(&raw.final_reading, "final_reading")?;

    let initial_reading = number(initial_raw, "initial_reading")?;
    let final_reading = number(final_raw, "final_reading")?;

    if final_reading < initial_reading {
        return Err(ValidationError::Ordering {
            initial: initial_reading,
            final_reading,
        });
    }

    policy.check(fleet)?;

    Ok(Record {
        // the store keeps whole seconds
        date: raw.date.unwrap_or(now).trunc_subsecs(0),
        operator: operator.to_string(),
        fleet: fleet.to_string(),
        initial_reading,
        final_reading,
        worked_hours: worked_hours(initial_reading, final_reading),
    })
}

pub fn worked_hours(initial_reading: f64, final_reading: f64) -> f64 {
    round2(final_reading - initial_reading)
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn number(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    parse_non_negative(value).ok_or_else(|| ValidationError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
