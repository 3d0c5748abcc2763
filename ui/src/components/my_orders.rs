use dioxus::prelude::*;

use super::shared_state::use_store_state;

/// Checkouts accepted by the wallet during this visit. Nothing is kept
/// after the page closes.
#[component]
pub fn MyOrders() -> Element {
    let state = use_store_state();
    let s = state.read();
    if s.receipts.is_empty() {
        return rsx! {};
    }

    let rows: Vec<_> = s
        .receipts
        .iter()
        .rev()
        .map(|receipt| {
            let names = receipt
                .items
                .iter()
                .filter_map(|id| s.config.catalog.get(*id))
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            (
                receipt.tx_hash.clone(),
                names,
                s.config.format_price(receipt.amount),
                receipt.submitted_at.format("%H:%M:%S").to_string(),
            )
        })
        .collect();
    drop(s);

    rsx! {
        div { class: "my-orders",
            h2 { "Purchases" }
            ul { class: "order-list",
                for (tx_hash, names, amount, time) in rows {
                    li { class: "order-card", key: "{tx_hash}",
                        p { class: "order-product", "{names}" }
                        p { class: "order-total", "{amount} at {time} UTC" }
                        code { class: "order-tx", "{tx_hash}" }
                    }
                }
            }
            p { class: "order-note", "Submitted transfers are not confirmed on-chain by this page." }
        }
    }
}
