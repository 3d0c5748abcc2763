use dioxus::prelude::*;
use futures::StreamExt;

use picart_common::wallet_backend::{WalletBackend, WalletError};

use super::notice::{checkout_message, success_message};
use super::shared_state::{use_store_state, Notice, StoreState, WalletStatus};
use super::wallet_router::WalletRouter;

/// Actions the UI can send to the wallet coroutine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    /// Ask the provider for account access.
    Connect,
    /// Pay for the current cart.
    Checkout,
}

/// Get a handle to send actions to the wallet coroutine.
pub fn use_wallet_action() -> Coroutine<WalletAction> {
    use_coroutine_handle::<WalletAction>()
}

/// Start the wallet coroutine and request a connection once on mount.
///
/// The coroutine owns the wallet and handles one action at a time, so a
/// checkout never overlaps another checkout or a reconnect.
pub fn use_wallet_coroutine() {
    let state = use_store_state();
    let wallet = use_coroutine(move |rx: UnboundedReceiver<WalletAction>| wallet_comms(rx, state));
    use_hook(move || wallet.send(WalletAction::Connect));
}

async fn wallet_comms(mut rx: UnboundedReceiver<WalletAction>, mut state: Signal<StoreState>) {
    let mut wallet = WalletRouter::detect();
    while let Some(action) = rx.next().await {
        tracing::debug!(?action, backend = wallet.backend_name(), "wallet action");
        match action {
            WalletAction::Connect => connect(&mut wallet, &mut state).await,
            WalletAction::Checkout => checkout(&mut wallet, &mut state).await,
        }
    }
}

async fn connect(wallet: &mut WalletRouter, state: &mut Signal<StoreState>) {
    if state.read().wallet.identity().is_some() {
        return;
    }
    state.write().wallet = WalletStatus::Connecting;

    let status = match wallet.connect().await {
        Ok(identity) => {
            tracing::info!(address = %identity.address, "wallet connected");
            WalletStatus::Connected(identity)
        }
        Err(WalletError::UserRejected) => {
            tracing::warn!("wallet connection rejected by user");
            WalletStatus::Rejected
        }
        Err(WalletError::Unavailable(reason)) => {
            tracing::error!(%reason, "wallet not found");
            WalletStatus::Unavailable(reason)
        }
        Err(WalletError::TransferFailed(reason)) => {
            tracing::error!(%reason, "error connecting to wallet");
            WalletStatus::Unavailable(reason)
        }
    };
    state.write().wallet = status;
}

async fn checkout(wallet: &mut WalletRouter, state: &mut Signal<StoreState>) {
    let (session, identity, config) = {
        let s = state.read();
        if s.paying {
            return;
        }
        (s.session.clone(), s.wallet.identity().cloned(), s.config.clone())
    };
    {
        let mut s = state.write();
        s.paying = true;
        s.notice = None;
    }

    let result = session.checkout(wallet, identity.as_ref(), &config).await;

    let mut s = state.write();
    s.paying = false;
    match result {
        Ok((next, receipt)) => {
            s.notice = Some(Notice::Success(success_message(&receipt, &config)));
            s.session = next;
            s.receipts.push(receipt);
        }
        Err(e) => {
            tracing::error!(error = %e, "payment failed");
            s.notice = Some(Notice::Error(checkout_message(&e)));
        }
    }
}
