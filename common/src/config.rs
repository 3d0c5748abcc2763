use serde::Deserialize;

use crate::currency::{format_amount, parse_ether, AmountError, Wei};
use crate::identity::{Address, AddressError};
use crate::product::{Catalog, CatalogError, CatalogItem, ImageRef, ItemId};

/// Recipient of every checkout transfer unless overridden at build time.
pub const DEFAULT_RECEIVER: &str = "0x3680C9C0Ad3F36C4134999e10212369BfccCaFa6";

/// Gas requested per item in the cart (a plain value transfer costs 21000).
pub const DEFAULT_GAS_PER_ITEM: u64 = 21_000;

/// Decimals shown for prices and totals.
pub const DEFAULT_DISPLAY_DECIMALS: usize = 3;

/// Built-in store definition, compiled into the binary.
const BUILTIN_STORE: &str = include_str!("catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid store JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid price for item {item}: {source}")]
    InvalidPrice {
        item: ItemId,
        #[source]
        source: AmountError,
    },
    #[error("invalid receiver address: {0}")]
    InvalidAddress(#[from] AddressError),
    #[error("gas_per_item must be positive")]
    ZeroGas,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Deserialize)]
struct RawStore {
    title: String,
    receiver: String,
    #[serde(default = "default_gas_per_item")]
    gas_per_item: u64,
    #[serde(default = "default_display_decimals")]
    display_decimals: usize,
    items: Vec<RawItem>,
}

#[derive(Deserialize)]
struct RawItem {
    id: u32,
    name: String,
    /// Decimal ether string, e.g. "0.001".
    price: String,
    image: String,
}

fn default_gas_per_item() -> u64 {
    DEFAULT_GAS_PER_ITEM
}

fn default_display_decimals() -> usize {
    DEFAULT_DISPLAY_DECIMALS
}

/// Static store configuration: what is for sale and where payments go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub title: String,
    pub receiver: Address,
    pub gas_per_item: u64,
    pub display_decimals: usize,
    pub catalog: Catalog,
}

impl StoreConfig {
    /// Parse and validate a store definition.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawStore = serde_json::from_str(json)?;
        if raw.gas_per_item == 0 {
            return Err(ConfigError::ZeroGas);
        }

        let items = raw
            .items
            .into_iter()
            .map(|item| {
                let id = ItemId(item.id);
                let unit_price = parse_ether(&item.price)
                    .map_err(|source| ConfigError::InvalidPrice { item: id, source })?;
                Ok(CatalogItem {
                    id,
                    name: item.name,
                    unit_price,
                    image: ImageRef(item.image),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            title: raw.title,
            receiver: raw.receiver.parse()?,
            gas_per_item: raw.gas_per_item,
            display_decimals: raw.display_decimals,
            catalog: Catalog::new(items)?,
        })
    }

    /// The compiled-in store, exactly as shipped.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_STORE)
    }

    /// The compiled-in store with build-time overrides applied.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::builtin()?;
        if let Some(receiver) = receiver_override() {
            tracing::info!(%receiver, "using receiver address from PICART_RECEIVER_ADDRESS");
            config.receiver = receiver.parse()?;
        }
        Ok(config)
    }

    /// Format an amount with the store's display precision.
    pub fn format_price(&self, amount: Wei) -> String {
        format_amount(amount, self.display_decimals)
    }
}

/// Receiver address from the compile-time `PICART_RECEIVER_ADDRESS` env var.
fn receiver_override() -> Option<&'static str> {
    option_env!("PICART_RECEIVER_ADDRESS").filter(|s| !s.trim().is_empty())
}
