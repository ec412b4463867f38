//! Column conversion helpers shared by the repositories.

use crate::{DbError, Result};

use jc_core::{ErrorLocation, SprintStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

/// Current time truncated to whole seconds, the resolution of the stored
/// timestamp columns. Write paths stamp with this so the value handed back
/// to the caller equals the value a later read returns.
pub(crate) fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

pub(crate) fn parse_timestamp(value: i64, column: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}: {}", column, value),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn parse_date(value: Option<String>, column: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|raw| {
            NaiveDate::from_str(&raw).map_err(|e| DbError::Initialization {
                message: format!("Invalid date in {}: {}", column, e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
}

pub(crate) fn parse_status(value: Option<String>, column: &str) -> Result<Option<SprintStatus>> {
    value
        .map(|raw| {
            SprintStatus::from_str(&raw).map_err(|e| DbError::Initialization {
                message: format!("Invalid SprintStatus in {}: {}", column, e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
}
