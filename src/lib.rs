//! Export Stripe transfer payouts as a QIF bank statement.
//!
//! ```rust,ignore
//! use stripe2qif::{QifExporter, StripeClient, StripeConfig};
//!
//! let client = StripeClient::new(StripeConfig::new(api_key));
//! let document = QifExporter::new(client).since(since).count(100).export().await?;
//! print!("{}", document.render());
//! ```

mod exporter;
mod types;

pub mod client;
pub mod errors;
pub mod qif;

pub use client::{FeeSummary, StripeClient, StripeConfig, Transfer, TransferDate, parse_from_date};
pub use errors::{ExportResult, TransferExportError};
pub use exporter::{DEFAULT_COUNT, QifExporter};
pub use qif::{QifDocument, format_entry};
pub use types::Entry;
