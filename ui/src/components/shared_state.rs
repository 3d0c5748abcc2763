use dioxus::prelude::*;

use picart_common::config::StoreConfig;
use picart_common::identity::WalletIdentity;
use picart_common::order::CheckoutReceipt;
use picart_common::product::ItemId;
use picart_common::storefront::{CartError, CartSession};

/// Where the wallet handshake stands.
#[derive(Clone, Debug, PartialEq)]
pub enum WalletStatus {
    Connecting,
    Connected(WalletIdentity),
    /// No provider, or the provider is disconnected. Browsing still works.
    Unavailable(String),
    /// The user declined the connection prompt; they may try again.
    Rejected,
}

impl WalletStatus {
    pub fn identity(&self) -> Option<&WalletIdentity> {
        match self {
            WalletStatus::Connected(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Banner message shown above the storefront.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Everything the page renders from. One instance per page, provided as
/// context by `App`; there is no global session.
#[derive(Clone, Debug)]
pub struct StoreState {
    pub config: StoreConfig,
    pub session: CartSession,
    pub wallet: WalletStatus,
    /// A checkout is waiting on the wallet. Cart edits are refused meanwhile.
    pub paying: bool,
    pub notice: Option<Notice>,
    /// Checkouts accepted during this visit, oldest first.
    pub receipts: Vec<CheckoutReceipt>,
}

impl StoreState {
    pub fn new(config: StoreConfig) -> Self {
        let session = CartSession::new(&config.catalog);
        Self {
            config,
            session,
            wallet: WalletStatus::Connecting,
            paying: false,
            notice: None,
            receipts: Vec::new(),
        }
    }

    pub fn add_to_cart(&mut self, id: ItemId) {
        if self.paying {
            return;
        }
        let next = self.session.add_to_cart(id);
        self.apply(next);
    }

    pub fn remove_from_cart(&mut self, id: ItemId) {
        if self.paying {
            return;
        }
        let next = self.session.remove_from_cart(id);
        self.apply(next);
    }

    fn apply(&mut self, next: Result<CartSession, CartError>) {
        match next {
            Ok(session) => self.session = session,
            Err(e) => {
                tracing::warn!(error = %e, "cart transition rejected");
                self.notice = Some(Notice::Error(e.to_string()));
            }
        }
    }

    /// Pay is offered only with a connected wallet and a non-empty cart.
    pub fn can_pay(&self) -> bool {
        !self.paying && !self.session.is_empty() && self.wallet.identity().is_some()
    }
}

pub fn use_store_state() -> Signal<StoreState> {
    use_context::<Signal<StoreState>>()
}
