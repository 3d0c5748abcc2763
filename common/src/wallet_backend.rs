use serde::{Deserialize, Serialize};

use crate::identity::WalletIdentity;
use crate::wallet::{TransactionHandle, TransferRequest};

/// Errors from wallet operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum WalletError {
    /// No provider is installed, or it is disconnected.
    #[error("wallet unavailable: {0}")]
    Unavailable(String),
    /// The user declined the connection or the transaction prompt.
    #[error("request rejected by user")]
    UserRejected,
    /// Provider-reported failure (funds, network, malformed response).
    #[error("transfer failed: {0}")]
    TransferFailed(String),
}

impl WalletError {
    /// Whether retrying the same action can succeed without changing setup.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Unavailable(_))
    }
}

/// Abstraction over wallet providers (browser-injected, in-memory dev wallet).
///
/// - `connect`    → ask the provider for the active account
/// - `send_value` → submit one value transfer; no confirmation wait
#[allow(async_fn_in_trait)]
pub trait WalletBackend {
    /// Request account access and return the active account.
    async fn connect(&mut self) -> Result<WalletIdentity, WalletError>;

    /// Submit a value transfer. Success means the provider accepted it.
    async fn send_value(
        &mut self,
        request: &TransferRequest,
    ) -> Result<TransactionHandle, WalletError>;

    /// Human-readable backend name (e.g. "injected", "dev").
    fn backend_name(&self) -> &str;
}
