use serde::{Deserialize, Serialize};

use crate::currency::Wei;
use crate::identity::Address;

/// A single value transfer handed to the wallet for signing and submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: Address,
    pub to: Address,
    pub value: Wei,
    /// Gas limit hint passed through to the provider.
    pub gas: u64,
}

/// What the provider returned for an accepted submission. Acceptance is not
/// confirmation: the transfer may still fail or never be mined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHandle {
    pub tx_hash: String,
}
