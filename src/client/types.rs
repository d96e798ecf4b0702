use crate::errors::{ExportResult, TransferExportError};
use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Unix-seconds timestamp as Stripe sends it on a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferDate(i64);

impl From<i64> for TransferDate {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<TransferDate> for NaiveDate {
    type Error = TransferExportError;

    // Calendar date in the process-local time zone, not UTC.
    fn try_from(value: TransferDate) -> Result<Self, Self::Error> {
        Local
            .timestamp_opt(value.0, 0)
            .single()
            .map(|instant| instant.date_naive())
            .ok_or(TransferExportError::TimestampOutOfRange)
    }
}

/// Parse a dd/mm/yyyy flag value into the exclusive lower-bound timestamp
/// passed to the transfers call. Midnight UTC of the given day.
pub fn parse_from_date(input: &str) -> ExportResult<i64> {
    let date = NaiveDate::parse_from_str(input.trim(), "%d/%m/%Y")?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp())
}
