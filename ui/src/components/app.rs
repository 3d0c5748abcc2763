use dioxus::prelude::*;

use picart_common::config::StoreConfig;

use super::cart_panel::CartPanel;
use super::my_orders::MyOrders;
use super::notice::NoticeBanner;
use super::shared_state::{use_store_state, StoreState};
use super::storefront_view::StorefrontView;
use super::wallet_api::use_wallet_coroutine;
use super::wallet_view::WalletView;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| StoreConfig::load().map_err(|e| e.to_string()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match config {
            Ok(config) => rsx! { Store { config } },
            Err(error) => {
                tracing::error!(%error, "store configuration is invalid");
                rsx! {
                    div { class: "container",
                        p { class: "notice notice-error", "Store configuration error: {error}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Store(config: StoreConfig) -> Element {
    use_context_provider(|| Signal::new(StoreState::new(config)));
    use_wallet_coroutine();

    rsx! { StoreLayout {} }
}

#[component]
fn StoreLayout() -> Element {
    let state = use_store_state();
    let title = state.read().config.title.clone();

    rsx! {
        div { class: "container",
            header { class: "app-header",
                h1 { class: "pic", "{title}" }
                WalletView {}
            }
            NoticeBanner {}
            main { class: "store",
                StorefrontView {}
                aside {
                    CartPanel {}
                    MyOrders {}
                }
            }
        }
    }
}
