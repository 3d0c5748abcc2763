use dioxus::prelude::*;

use picart_common::product::{CatalogItem, ImageRef};

use super::shared_state::use_store_state;

const SUNSET: Asset = asset!("/assets/sunset.svg");
const MOUNTAIN: Asset = asset!("/assets/mountain.svg");
const BEACH: Asset = asset!("/assets/beach.svg");
const FLOWER: Asset = asset!("/assets/flowerpaint.svg");
const ANCIENT: Asset = asset!("/assets/ancientpaint.svg");

/// Resolve a catalog image handle to a bundled asset URL. Unknown handles
/// are used as plain URLs.
fn image_src(image: &ImageRef) -> String {
    match image.0.as_str() {
        "/assets/sunset.svg" => SUNSET.to_string(),
        "/assets/mountain.svg" => MOUNTAIN.to_string(),
        "/assets/beach.svg" => BEACH.to_string(),
        "/assets/flowerpaint.svg" => FLOWER.to_string(),
        "/assets/ancientpaint.svg" => ANCIENT.to_string(),
        other => other.to_string(),
    }
}

/// Grid of pictures still on the shelf.
#[component]
pub fn StorefrontView() -> Element {
    let state = use_store_state();
    let items: Vec<CatalogItem> = state.read().session.available().to_vec();

    rsx! {
        div { class: "pictures",
            if items.is_empty() {
                p { class: "empty-state", "Everything is in your cart or sold." }
            }
            for item in items {
                PictureCard { key: "{item.id.0}", item }
            }
        }
    }
}

#[component]
fn PictureCard(item: CatalogItem) -> Element {
    let mut state = use_store_state();
    let price = state.read().config.format_price(item.unit_price);
    let paying = state.read().paying;
    let src = image_src(&item.image);
    let id = item.id;

    rsx! {
        div { class: "picture",
            div { class: "picture-content",
                img { class: "picture-image", src: "{src}", alt: "{item.name}" }
                div { class: "bottom-half",
                    h3 { "{item.name}" }
                    p { "Price: {price}" }
                    button {
                        disabled: paying,
                        onclick: move |_| state.write().add_to_cart(id),
                        "Buy"
                    }
                }
            }
        }
    }
}
