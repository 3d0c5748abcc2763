//! Wire types for the browser wallet provider API (EIP-1193).
//!
//! The UI's injected wallet serializes these with `serde-wasm-bindgen` and
//! hands them to `window.ethereum.request(...)`. Keeping them here lets the
//! request shapes and error mapping be tested natively.

use serde::{Deserialize, Serialize};

use crate::identity::{Address, WalletIdentity};
use crate::wallet::{TransactionHandle, TransferRequest};
use crate::wallet_backend::WalletError;

/// User rejected the request.
pub const CODE_USER_REJECTED: i64 = 4001;
/// Requested method or account not authorized by the user.
pub const CODE_UNAUTHORIZED: i64 = 4100;
/// Provider does not support the method.
pub const CODE_UNSUPPORTED_METHOD: i64 = 4200;
/// Provider is disconnected from all chains.
pub const CODE_DISCONNECTED: i64 = 4900;
/// Provider is not connected to the requested chain.
pub const CODE_CHAIN_DISCONNECTED: i64 = 4901;

/// Argument to `provider.request(...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RpcRequest {
    /// Prompts the user to expose accounts.
    #[serde(rename = "eth_requestAccounts")]
    RequestAccounts,
    /// Lists already-authorized accounts without prompting.
    #[serde(rename = "eth_accounts")]
    Accounts,
    #[serde(rename = "eth_sendTransaction")]
    SendTransaction([TransactionParams; 1]),
}

impl RpcRequest {
    pub fn send_transaction(request: &TransferRequest) -> Self {
        Self::SendTransaction([TransactionParams::from(request)])
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::RequestAccounts => "eth_requestAccounts",
            Self::Accounts => "eth_accounts",
            Self::SendTransaction(_) => "eth_sendTransaction",
        }
    }
}

/// Transaction object for `eth_sendTransaction`. Quantities are hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionParams {
    pub from: Address,
    pub to: Address,
    pub value: String,
    pub gas: String,
}

impl From<&TransferRequest> for TransactionParams {
    fn from(request: &TransferRequest) -> Self {
        Self {
            from: request.from,
            to: request.to,
            value: request.value.to_hex_quantity(),
            gas: format!("{:#x}", request.gas),
        }
    }
}

/// Error object a provider rejects its promise with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl From<ProviderError> for WalletError {
    fn from(err: ProviderError) -> Self {
        match err.code {
            CODE_USER_REJECTED | CODE_UNAUTHORIZED => WalletError::UserRejected,
            CODE_DISCONNECTED | CODE_CHAIN_DISCONNECTED | CODE_UNSUPPORTED_METHOD => {
                WalletError::Unavailable(err.message)
            }
            _ => WalletError::TransferFailed(format!("{} (code {})", err.message, err.code)),
        }
    }
}

/// Identity from an `eth_requestAccounts` result: the first listed account.
pub fn identity_from_accounts(
    accounts: &[String],
    backend: &str,
) -> Result<WalletIdentity, WalletError> {
    let first = accounts
        .first()
        .ok_or_else(|| WalletError::Unavailable("provider returned no accounts".into()))?;
    let address = first
        .parse::<Address>()
        .map_err(|e| WalletError::TransferFailed(format!("bad account {first:?}: {e}")))?;
    Ok(WalletIdentity {
        address,
        backend: backend.to_string(),
    })
}

/// Handle from an `eth_sendTransaction` result (the transaction hash).
pub fn handle_from_hash(tx_hash: String) -> Result<TransactionHandle, WalletError> {
    let valid = tx_hash
        .strip_prefix("0x")
        .is_some_and(|digits| digits.len() == 64 && digits.chars().all(|c| c.is_ascii_hexdigit()));
    if !valid {
        return Err(WalletError::TransferFailed(format!(
            "provider returned malformed transaction hash {tx_hash:?}"
        )));
    }
    Ok(TransactionHandle { tx_hash })
}
