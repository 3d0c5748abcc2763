use dioxus::prelude::*;

use super::shared_state::{use_store_state, WalletStatus};
use super::wallet_api::{use_wallet_action, WalletAction};

/// Header badge showing the connected account, or a way to connect.
#[component]
pub fn WalletView() -> Element {
    let state = use_store_state();
    let wallet = use_wallet_action();
    let status = state.read().wallet.clone();

    match status {
        WalletStatus::Connecting => rsx! {
            span { class: "wallet-badge wallet-pending", "Connecting wallet…" }
        },
        WalletStatus::Connected(identity) => {
            let short = identity.address.short();
            let full = identity.address.to_string();
            rsx! {
                span { class: "wallet-badge wallet-connected", title: "{full}",
                    "{short}"
                    if identity.backend == "dev" {
                        span { class: "dev-badge", " [dev]" }
                    }
                }
            }
        }
        WalletStatus::Rejected => rsx! {
            span { class: "wallet-badge wallet-rejected",
                "Wallet connection declined "
                button { onclick: move |_| wallet.send(WalletAction::Connect), "Connect" }
            }
        },
        WalletStatus::Unavailable(reason) => rsx! {
            span { class: "wallet-badge wallet-missing", title: "{reason}",
                "No wallet found. Install MetaMask to pay."
            }
        },
    }
}
