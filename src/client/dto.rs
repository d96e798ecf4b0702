use serde::{Deserialize, Serialize};

use super::types::TransferDate;

/// List envelope returned by `GET /v1/transfers`.
#[derive(Debug, Deserialize)]
pub(super) struct TransferList {
    pub(super) data: Vec<Transfer>,
}

/// One transfer as the pinned 2013-08-13 API shape sends it: the net
/// amount and fee total are integers in minor currency units, the fee
/// sits in a nested summary object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    pub date: TransferDate,
    pub amount: i64,
    pub currency: String,
    pub summary: FeeSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeSummary {
    pub charge_fees: i64,
}
