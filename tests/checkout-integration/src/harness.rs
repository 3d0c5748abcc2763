use std::collections::VecDeque;

use picart_common::config::StoreConfig;
use picart_common::identity::{Address, WalletIdentity};
use picart_common::order::{CheckoutError, CheckoutReceipt};
use picart_common::product::{CatalogItem, ItemId};
use picart_common::storefront::{CartError, CartSession};
use picart_common::wallet::{TransactionHandle, TransferRequest};
use picart_common::wallet_backend::{WalletBackend, WalletError};

/// Account the scripted wallet reports on connect.
pub const BUYER: Address = Address::from_bytes([0xb0; 20]);

/// Wallet whose answers are queued up front by the test.
///
/// `connect` fails with `Unavailable` when built with `missing()`. Each
/// `send_value` pops the next queued outcome; an empty queue accepts.
pub struct ScriptedWallet {
    present: bool,
    reject_connect: bool,
    outcomes: VecDeque<Result<(), WalletError>>,
    pub sent: Vec<TransferRequest>,
    pub connects: usize,
}

impl ScriptedWallet {
    pub fn new() -> Self {
        Self {
            present: true,
            reject_connect: false,
            outcomes: VecDeque::new(),
            sent: Vec::new(),
            connects: 0,
        }
    }

    /// No provider installed.
    pub fn missing() -> Self {
        Self {
            present: false,
            ..Self::new()
        }
    }

    /// Provider present, but the user declines the connection prompt.
    pub fn declining() -> Self {
        Self {
            reject_connect: true,
            ..Self::new()
        }
    }

    /// Queue the outcome of the next transfer.
    pub fn then(mut self, outcome: Result<(), WalletError>) -> Self {
        self.outcomes.push_back(outcome);
        self
    }
}

impl Default for ScriptedWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletBackend for ScriptedWallet {
    async fn connect(&mut self) -> Result<WalletIdentity, WalletError> {
        self.connects += 1;
        if !self.present {
            return Err(WalletError::Unavailable("no provider injected".into()));
        }
        if self.reject_connect {
            return Err(WalletError::UserRejected);
        }
        Ok(WalletIdentity {
            address: BUYER,
            backend: self.backend_name().to_string(),
        })
    }

    async fn send_value(
        &mut self,
        request: &TransferRequest,
    ) -> Result<TransactionHandle, WalletError> {
        self.sent.push(request.clone());
        self.outcomes.pop_front().unwrap_or(Ok(()))?;
        Ok(TransactionHandle {
            tx_hash: format!("0x{:064x}", self.sent.len()),
        })
    }

    fn backend_name(&self) -> &str {
        "scripted"
    }
}

/// One shopper: store config, their session, their wallet.
pub struct TestHarness {
    pub config: StoreConfig,
    pub session: CartSession,
    pub wallet: ScriptedWallet,
    pub identity: Option<WalletIdentity>,
    pub connect_error: Option<WalletError>,
}

impl TestHarness {
    /// Built-in store, wallet connected.
    pub async fn setup() -> Self {
        Self::with_wallet(ScriptedWallet::new()).await
    }

    /// Built-in store; connect with the given wallet and keep the outcome.
    pub async fn with_wallet(mut wallet: ScriptedWallet) -> Self {
        crate::init_tracing();
        let config =
            StoreConfig::builtin().unwrap_or_else(|e| panic!("built-in store is invalid: {e}"));
        let session = CartSession::new(&config.catalog);
        let (identity, connect_error) = match wallet.connect().await {
            Ok(identity) => (Some(identity), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            config,
            session,
            wallet,
            identity,
            connect_error,
        }
    }

    pub fn add(&mut self, id: u32) -> Result<(), CartError> {
        self.session = self.session.add_to_cart(ItemId(id))?;
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> Result<(), CartError> {
        self.session = self.session.remove_from_cart(ItemId(id))?;
        Ok(())
    }

    /// Run a checkout and keep the resulting session on success, the way
    /// the UI does.
    pub async fn checkout(&mut self) -> Result<CheckoutReceipt, CheckoutError> {
        let (next, receipt) = self
            .session
            .checkout(&mut self.wallet, self.identity.as_ref(), &self.config)
            .await?;
        self.session = next;
        Ok(receipt)
    }

    /// Items the session still sells (shelf plus cart).
    pub fn for_sale(&self) -> Vec<CatalogItem> {
        let mut items = self.session.available().to_vec();
        items.extend_from_slice(self.session.cart());
        items
    }
}
