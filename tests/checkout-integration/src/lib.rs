use picart_common::currency::parse_ether;
use picart_common::product::{Catalog, CatalogItem, ImageRef, ItemId};
use picart_common::storefront::CartSession;

pub mod harness;

/// Install a `RUST_LOG`-driven subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A catalog item priced in decimal ether.
pub fn picture(id: u32, name: &str, price: &str) -> CatalogItem {
    CatalogItem {
        id: ItemId(id),
        name: name.to_string(),
        unit_price: parse_ether(price).unwrap_or_else(|e| panic!("bad test price {price}: {e}")),
        image: ImageRef(format!("/assets/{}.svg", name.to_lowercase())),
    }
}

/// A(0.001) and B(0.002).
pub fn two_picture_catalog() -> Catalog {
    Catalog::new(vec![picture(1, "A", "0.001"), picture(2, "B", "0.002")])
        .unwrap_or_else(|e| panic!("invalid test catalog: {e}"))
}

/// Ids of a list of items, in order.
pub fn ids(items: &[CatalogItem]) -> Vec<u32> {
    items.iter().map(|item| item.id.0).collect()
}

/// Check the session invariants against the items still for sale.
///
/// Panics with a description of the first violation.
pub fn assert_invariants(session: &CartSession, for_sale: &[CatalogItem]) {
    let mut seen: Vec<u32> = ids(session.available());
    seen.extend(ids(session.cart()));
    let unique: std::collections::BTreeSet<u32> = seen.iter().copied().collect();
    assert_eq!(unique.len(), seen.len(), "duplicate items in session: {seen:?}");

    let mut expected = ids(for_sale);
    expected.sort_unstable();
    let mut actual = seen;
    actual.sort_unstable();
    assert_eq!(actual, expected, "available ∪ cart differs from items for sale");

    assert_eq!(
        session.recomputed_total(),
        Some(session.total()),
        "running total drifted from cart contents"
    );
}
