use dioxus::prelude::*;

use picart_common::config::StoreConfig;
use picart_common::order::{CheckoutError, CheckoutReceipt};
use picart_common::wallet_backend::WalletError;

use super::shared_state::{use_store_state, Notice};

/// User-facing text for a failed checkout.
pub fn checkout_message(err: &CheckoutError) -> String {
    match err {
        CheckoutError::WalletUnavailable => "Connect a wallet to pay.".to_string(),
        CheckoutError::EmptyCart => "Your cart is empty.".to_string(),
        CheckoutError::Wallet(WalletError::UserRejected) => {
            "Payment cancelled in your wallet.".to_string()
        }
        CheckoutError::Wallet(WalletError::Unavailable(reason)) => {
            format!("Wallet unavailable: {reason}")
        }
        CheckoutError::Wallet(WalletError::TransferFailed(reason)) => {
            format!("Payment failed: {reason}. Please try again.")
        }
    }
}

/// User-facing text for an accepted checkout.
pub fn success_message(receipt: &CheckoutReceipt, config: &StoreConfig) -> String {
    let hash = &receipt.tx_hash;
    let short = if hash.len() > 12 {
        format!("{}…{}", &hash[..8], &hash[hash.len() - 4..])
    } else {
        hash.clone()
    };
    format!(
        "Payment of {} submitted! Transaction {short}",
        config.format_price(receipt.amount)
    )
}

#[component]
pub fn NoticeBanner() -> Element {
    let mut state = use_store_state();
    let notice = state.read().notice.clone();

    let Some(notice) = notice else {
        return rsx! {};
    };
    let (class, text) = match notice {
        Notice::Success(text) => ("notice notice-success", text),
        Notice::Error(text) => ("notice notice-error", text),
    };

    rsx! {
        div { class: "{class}",
            span { "{text}" }
            button {
                class: "notice-dismiss",
                onclick: move |_| state.write().notice = None,
                "×"
            }
        }
    }
}
