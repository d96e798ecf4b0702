use crate::client::{StripeClient, Transfer};
use crate::errors::ExportResult;
use crate::qif::QifDocument;
use crate::types::Entry;

// Server-side page cap; larger values pass through and get capped there.
pub const DEFAULT_COUNT: u32 = 100;

/// Fetches one page of transfers and turns it into a QIF document.
///
/// One exporter performs one run: a single fetch, one entry per transfer
/// in the order the API returned them.
pub struct QifExporter {
    client: StripeClient,
    since: i64,
    count: u32,
}

impl QifExporter {
    pub fn new(client: StripeClient) -> Self {
        Self {
            client,
            since: 0,
            count: DEFAULT_COUNT,
        }
    }

    /// Exclusive lower bound on the transfer creation time, Unix seconds.
    pub fn since(mut self, since: i64) -> Self {
        self.since = since;
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub async fn export(&self) -> ExportResult<QifDocument> {
        let transfers = self.client.list_transfers(self.since, self.count).await?;
        build_document(&transfers)
    }
}

fn build_document(transfers: &[Transfer]) -> ExportResult<QifDocument> {
    let mut document = QifDocument::new();
    for transfer in transfers {
        document.add(Entry::try_from(transfer)?);
    }
    Ok(document)
}
