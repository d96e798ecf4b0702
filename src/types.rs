use crate::client::Transfer;
use crate::errors::TransferExportError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One normalized QIF transaction, built from a fetched transfer.
///
/// `amount` is the net amount in major currency units, sign preserved;
/// fixing to three decimal places happens at render time. The fee inside
/// `description` keeps its natural decimal form and is never rounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl TryFrom<&Transfer> for Entry {
    type Error = TransferExportError;

    fn try_from(transfer: &Transfer) -> Result<Self, Self::Error> {
        let date: NaiveDate = transfer.date.try_into()?;
        let amount = Decimal::new(transfer.amount, 2);
        let fee = Decimal::new(transfer.summary.charge_fees, 2).normalize();
        let currency = transfer.currency.to_uppercase();

        Ok(Entry {
            date,
            description: format!("Transfer on {date} (Fee: {fee}{currency})"),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{FeeSummary, TransferDate};
    use chrono::{Local, TimeZone};
    use rstest::rstest;
    use std::str::FromStr;

    // Noon UTC on 2021-03-15; expectations derive the local calendar day
    // from this rather than hardcoding it.
    const NOON_TIMESTAMP: i64 = 1615809600;

    fn create_test_transfer(amount: i64, charge_fees: i64, currency: &str) -> Transfer {
        Transfer {
            date: TransferDate::from(NOON_TIMESTAMP),
            amount,
            currency: currency.to_string(),
            summary: FeeSummary { charge_fees },
        }
    }

    fn local_date_of(timestamp: i64) -> NaiveDate {
        Local
            .timestamp_opt(timestamp, 0)
            .single()
            .unwrap()
            .date_naive()
    }

    #[test]
    fn test_entry_from_transfer() {
        let transfer = create_test_transfer(10000, 250, "usd");
        let entry = Entry::try_from(&transfer).unwrap();

        let date = local_date_of(NOON_TIMESTAMP);
        assert_eq!(entry.date, date);
        assert_eq!(
            entry.description,
            format!("Transfer on {date} (Fee: 2.5USD)")
        );
        assert_eq!(entry.amount, Decimal::from_str("100.00").unwrap());
    }

    #[test]
    fn test_entry_amount_sign_preserved() {
        let transfer = create_test_transfer(-500, 0, "gbp");
        let entry = Entry::try_from(&transfer).unwrap();
        assert_eq!(entry.amount, Decimal::from_str("-5.00").unwrap());
    }

    #[rstest]
    #[case(250, "2.5")]
    #[case(150, "1.5")]
    #[case(123, "1.23")]
    #[case(100, "1")]
    #[case(0, "0")]
    #[case(5, "0.05")]
    fn test_fee_keeps_natural_form(#[case] charge_fees: i64, #[case] expected: &str) {
        let transfer = create_test_transfer(10000, charge_fees, "usd");
        let entry = Entry::try_from(&transfer).unwrap();
        assert!(
            entry.description.ends_with(&format!("(Fee: {expected}USD)")),
            "unexpected description: {}",
            entry.description
        );
    }

    #[rstest]
    #[case("usd", "USD")]
    #[case("eur", "EUR")]
    #[case("Gbp", "GBP")]
    #[case("CAD", "CAD")]
    fn test_currency_uppercased(#[case] currency: &str, #[case] expected: &str) {
        let transfer = create_test_transfer(100, 50, currency);
        let entry = Entry::try_from(&transfer).unwrap();
        assert!(entry.description.ends_with(&format!("0.5{expected})")));
    }

    #[test]
    fn test_entry_from_out_of_range_timestamp() {
        let transfer = Transfer {
            date: TransferDate::from(i64::MAX),
            amount: 100,
            currency: "usd".to_string(),
            summary: FeeSummary { charge_fees: 0 },
        };
        let result = Entry::try_from(&transfer);
        assert!(matches!(
            result.unwrap_err(),
            TransferExportError::TimestampOutOfRange
        ));
    }
}
