//! Browser-extension wallet backend.
//!
//! Talks to the provider object injected at `window.ethereum` (MetaMask and
//! friends) through its EIP-1193 `request({ method, params })` function.
//! Request shapes and error mapping live in `picart_common::eip1193`; this
//! module only moves values across the JS boundary.

use picart_common::eip1193::RpcRequest;
use picart_common::identity::WalletIdentity;
use picart_common::wallet::{TransactionHandle, TransferRequest};
use picart_common::wallet_backend::{WalletBackend, WalletError};

/// Wallet backed by `window.ethereum`. Holds no state: the provider is
/// looked up on every call so a late-injected extension is still found.
#[derive(Clone, Debug, Default)]
pub struct InjectedWallet;

impl InjectedWallet {
    pub fn new() -> Self {
        Self
    }

    /// Whether a provider object is present on the page.
    pub fn is_present() -> bool {
        #[cfg(target_family = "wasm")]
        {
            wasm_impl::provider().is_ok()
        }
        #[cfg(not(target_family = "wasm"))]
        {
            false
        }
    }

    #[allow(unused_variables)]
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        request: &RpcRequest,
    ) -> Result<T, WalletError> {
        #[cfg(target_family = "wasm")]
        {
            let value = wasm_impl::request(request).await?;
            serde_wasm_bindgen::from_value(value).map_err(|e| {
                WalletError::TransferFailed(format!(
                    "unexpected {} response: {e}",
                    request.method()
                ))
            })
        }
        #[cfg(not(target_family = "wasm"))]
        {
            Err(WalletError::Unavailable(
                "browser wallet providers exist only in web builds".to_string(),
            ))
        }
    }
}

impl WalletBackend for InjectedWallet {
    async fn connect(&mut self) -> Result<WalletIdentity, WalletError> {
        let accounts: Vec<String> = self.request(&RpcRequest::RequestAccounts).await?;
        picart_common::eip1193::identity_from_accounts(&accounts, self.backend_name())
    }

    async fn send_value(
        &mut self,
        request: &TransferRequest,
    ) -> Result<TransactionHandle, WalletError> {
        let tx_hash: String = self
            .request(&RpcRequest::send_transaction(request))
            .await?;
        picart_common::eip1193::handle_from_hash(tx_hash)
    }

    fn backend_name(&self) -> &str {
        "injected"
    }
}

#[cfg(target_family = "wasm")]
mod wasm_impl {
    use js_sys::{Function, Promise, Reflect};
    use serde::Serialize;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use picart_common::eip1193::{ProviderError, RpcRequest};
    use picart_common::wallet_backend::WalletError;

    pub(super) fn provider() -> Result<JsValue, WalletError> {
        let window = web_sys::window()
            .ok_or_else(|| WalletError::Unavailable("no browser window".to_string()))?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
            .map_err(|_| WalletError::Unavailable("window.ethereum is not readable".to_string()))?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return Err(WalletError::Unavailable(
                "no wallet extension found (window.ethereum is missing)".to_string(),
            ));
        }
        Ok(ethereum)
    }

    /// Call `provider.request(args)` and await the returned promise.
    pub(super) async fn request(request: &RpcRequest) -> Result<JsValue, WalletError> {
        let provider = provider()?;
        let request_fn: Function = Reflect::get(&provider, &JsValue::from_str("request"))
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or_else(|| {
                WalletError::Unavailable("wallet provider has no request()".to_string())
            })?;

        let args = request
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| WalletError::TransferFailed(format!("encoding request: {e}")))?;

        tracing::debug!(method = request.method(), "wallet provider request");
        let promise: Promise = request_fn
            .call1(&provider, &args)
            .map_err(provider_error)?
            .dyn_into()
            .map_err(|_| WalletError::TransferFailed("request() did not return a promise".into()))?;

        JsFuture::from(promise).await.map_err(provider_error)
    }

    /// Read `{ code, message }` off whatever the provider rejected with.
    /// `message` on JS `Error` objects is not enumerable, hence `Reflect`.
    fn provider_error(value: JsValue) -> WalletError {
        let code = Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64());
        let message = Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        match code {
            Some(code) => ProviderError {
                code: code as i64,
                message,
            }
            .into(),
            None => WalletError::TransferFailed(message),
        }
    }
}
