use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::currency::Wei;
use crate::identity::WalletIdentity;
use crate::product::ItemId;
use crate::storefront::CartSession;
use crate::wallet::TransferRequest;
use crate::wallet_backend::{WalletBackend, WalletError};

/// Record of a checkout the wallet accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub tx_hash: String,
    pub amount: Wei,
    pub items: Vec<ItemId>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    /// No wallet was connected, so nothing was submitted.
    #[error("no wallet connected")]
    WalletUnavailable,
    #[error("cart is empty")]
    EmptyCart,
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

impl CartSession {
    /// Build the transfer for the current cart without submitting it.
    pub fn transfer_request(&self, from: &WalletIdentity, config: &StoreConfig) -> TransferRequest {
        TransferRequest {
            from: from.address,
            to: config.receiver,
            value: self.total(),
            gas: self.gas_hint(config.gas_per_item),
        }
    }

    /// Pay for the cart with a single value transfer to the store's receiver.
    ///
    /// On success returns the emptied session plus a receipt. On failure the
    /// caller's session is still the one to keep; nothing is retried.
    pub async fn checkout<W: WalletBackend>(
        &self,
        wallet: &mut W,
        identity: Option<&WalletIdentity>,
        config: &StoreConfig,
    ) -> Result<(CartSession, CheckoutReceipt), CheckoutError> {
        let Some(identity) = identity else {
            tracing::warn!("checkout attempted without a connected wallet");
            return Err(CheckoutError::WalletUnavailable);
        };
        if self.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let request = self.transfer_request(identity, config);
        tracing::info!(
            backend = wallet.backend_name(),
            from = %request.from,
            to = %request.to,
            value = %request.value,
            gas = request.gas,
            "submitting checkout transfer"
        );

        let handle = match wallet.send_value(&request).await {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(error = %e, "checkout transfer failed");
                return Err(e.into());
            }
        };

        let receipt = CheckoutReceipt {
            tx_hash: handle.tx_hash,
            amount: request.value,
            items: self.cart().iter().map(|item| item.id).collect(),
            submitted_at: Utc::now(),
        };
        tracing::info!(tx_hash = %receipt.tx_hash, items = receipt.items.len(), "checkout submitted");
        Ok((self.after_purchase(), receipt))
    }
}
