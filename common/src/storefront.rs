use serde::{Deserialize, Serialize};

use crate::currency::Wei;
use crate::product::{Catalog, CatalogItem, ItemId};

/// Rejected cart transitions. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("item {0} is already in the cart")]
    NotAvailable(ItemId),
    #[error("item {0} is not in the cart")]
    NotInCart(ItemId),
    #[error("item {0} is not for sale")]
    UnknownItem(ItemId),
    #[error("cart total overflowed")]
    TotalOverflow,
}

/// Per-visitor shopping state: what is still on the shelf, what is in the
/// cart, and the running total.
///
/// Transitions take `&self` and return the next session, so a failed
/// transition (or a failed checkout) can never leave a half-updated value
/// behind.
///
/// Invariants:
/// - `available` and `cart` are disjoint and together hold every item still
///   for sale.
/// - `total` is the exact sum of `cart` unit prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSession {
    available: Vec<CatalogItem>,
    cart: Vec<CatalogItem>,
    total: Wei,
}

impl CartSession {
    /// Fresh session: everything on the shelf, empty cart.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            available: catalog.items().to_vec(),
            cart: Vec::new(),
            total: Wei::ZERO,
        }
    }

    pub fn available(&self) -> &[CatalogItem] {
        &self.available
    }

    pub fn cart(&self) -> &[CatalogItem] {
        &self.cart
    }

    pub fn total(&self) -> Wei {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.cart.len()
    }

    pub fn is_available(&self, id: ItemId) -> bool {
        self.available.iter().any(|item| item.id == id)
    }

    pub fn in_cart(&self, id: ItemId) -> bool {
        self.cart.iter().any(|item| item.id == id)
    }

    /// Gas limit to request for a checkout of the current cart.
    pub fn gas_hint(&self, gas_per_item: u64) -> u64 {
        gas_per_item.saturating_mul(self.cart.len() as u64)
    }

    /// Move an item from the shelf to the end of the cart.
    pub fn add_to_cart(&self, id: ItemId) -> Result<Self, CartError> {
        let Some(pos) = self.available.iter().position(|item| item.id == id) else {
            return Err(if self.in_cart(id) {
                CartError::NotAvailable(id)
            } else {
                CartError::UnknownItem(id)
            });
        };

        let mut next = self.clone();
        let item = next.available.remove(pos);
        next.total = next
            .total
            .checked_add(item.unit_price)
            .ok_or(CartError::TotalOverflow)?;
        tracing::debug!(item = %id, total = %next.total, "added to cart");
        next.cart.push(item);
        Ok(next)
    }

    /// Move an item from the cart back to the end of the shelf.
    pub fn remove_from_cart(&self, id: ItemId) -> Result<Self, CartError> {
        let Some(pos) = self.cart.iter().position(|item| item.id == id) else {
            return Err(if self.is_available(id) {
                CartError::NotInCart(id)
            } else {
                CartError::UnknownItem(id)
            });
        };

        let mut next = self.clone();
        let item = next.cart.remove(pos);
        next.total = next.total.saturating_sub(item.unit_price);
        tracing::debug!(item = %id, total = %next.total, "removed from cart");
        next.available.push(item);
        Ok(next)
    }

    /// Session after the cart contents were paid for: the cart empties and
    /// the purchased items do not return to the shelf.
    pub fn after_purchase(&self) -> Self {
        Self {
            available: self.available.clone(),
            cart: Vec::new(),
            total: Wei::ZERO,
        }
    }

    /// Sum of cart prices computed from scratch. Matches `total()` whenever
    /// the invariants hold.
    pub fn recomputed_total(&self) -> Option<Wei> {
        Wei::checked_sum(self.cart.iter().map(|item| item.unit_price))
    }
}
