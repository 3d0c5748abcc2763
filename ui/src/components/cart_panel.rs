use dioxus::prelude::*;

use super::shared_state::use_store_state;
use super::wallet_api::{use_wallet_action, WalletAction};

#[component]
pub fn CartPanel() -> Element {
    let mut state = use_store_state();
    let wallet = use_wallet_action();

    let s = state.read();
    let lines: Vec<_> = s
        .session
        .cart()
        .iter()
        .map(|item| (item.id, item.name.clone(), s.config.format_price(item.unit_price)))
        .collect();
    let total = s.config.format_price(s.session.total());
    let paying = s.paying;
    let can_pay = s.can_pay();
    let wallet_missing = s.wallet.identity().is_none();
    drop(s);

    rsx! {
        div { class: "cart",
            h2 { "Shopping Cart" }
            if lines.is_empty() {
                p { class: "empty-state", "Your cart is empty." }
            }
            ul { class: "cart-items",
                for (id, name, price) in lines {
                    li { key: "{id.0}",
                        "{name} - {price}"
                        button {
                            class: "remove-button",
                            disabled: paying,
                            onclick: move |_| state.write().remove_from_cart(id),
                            "Remove"
                        }
                    }
                }
            }
            p { class: "cart-total", "Total: {total}" }
            button {
                class: "pay-button",
                disabled: !can_pay,
                onclick: move |_| wallet.send(WalletAction::Checkout),
                if paying { "Waiting for wallet…" } else { "Pay" }
            }
            if wallet_missing {
                p { class: "cart-hint", "Connect a wallet to check out." }
            }
        }
    }
}
