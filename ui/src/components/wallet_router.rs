//! Picks the wallet backend for this build.
//!
//! `dev-wallet` builds pay with the in-memory `DevWallet`; everything else
//! goes through the browser extension.

use picart_common::identity::WalletIdentity;
use picart_common::wallet::{TransactionHandle, TransferRequest};
use picart_common::wallet_backend::{WalletBackend, WalletError};

use super::wallet_dev::DevWallet;
use super::wallet_injected::InjectedWallet;

#[derive(Clone, Debug)]
pub enum WalletRouter {
    Injected(InjectedWallet),
    Dev(DevWallet),
}

impl WalletRouter {
    pub fn detect() -> Self {
        if cfg!(feature = "dev-wallet") {
            tracing::info!("using in-memory dev wallet");
            Self::Dev(DevWallet::new())
        } else {
            if !InjectedWallet::is_present() {
                tracing::warn!("no browser wallet detected; checkout will be disabled");
            }
            Self::Injected(InjectedWallet::new())
        }
    }
}

impl WalletBackend for WalletRouter {
    async fn connect(&mut self) -> Result<WalletIdentity, WalletError> {
        match self {
            Self::Injected(wallet) => wallet.connect().await,
            Self::Dev(wallet) => wallet.connect().await,
        }
    }

    async fn send_value(
        &mut self,
        request: &TransferRequest,
    ) -> Result<TransactionHandle, WalletError> {
        match self {
            Self::Injected(wallet) => wallet.send_value(request).await,
            Self::Dev(wallet) => wallet.send_value(request).await,
        }
    }

    fn backend_name(&self) -> &str {
        match self {
            Self::Injected(wallet) => wallet.backend_name(),
            Self::Dev(wallet) => wallet.backend_name(),
        }
    }
}
