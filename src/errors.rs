use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferExportError {
    /// Transport or HTTP-status failure from the Stripe request
    #[error("Stripe request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not decode as a transfer list
    #[error("Failed to decode Stripe response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The --from date was not a valid dd/mm/yyyy date
    #[error("Invalid from date: {0}")]
    FromDateInvalid(#[from] chrono::ParseError),

    /// A transfer timestamp fell outside the representable calendar range
    #[error("Transfer timestamp out of range")]
    TimestampOutOfRange,
}

/// Alias for Result with the crate's error type
pub type ExportResult<T> = Result<T, TransferExportError>;
