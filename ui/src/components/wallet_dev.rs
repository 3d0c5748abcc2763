use picart_common::currency::{Wei, WEI_PER_ETHER};
use picart_common::identity::{Address, WalletIdentity};
use picart_common::wallet::{TransactionHandle, TransferRequest};
use picart_common::wallet_backend::{WalletBackend, WalletError};

/// Account the dev wallet pretends to own.
const DEV_ADDRESS: Address = Address::from_bytes([0xde; 20]);

/// In-memory wallet for local development.
///
/// Every transfer is "accepted" instantly while the balance lasts; no chain
/// is involved. Swap for the injected wallet in real builds.
#[derive(Clone, Debug)]
pub struct DevWallet {
    address: Address,
    balance: Wei,
    sent: u64,
}

impl DevWallet {
    pub fn new() -> Self {
        Self::with_balance(Wei(WEI_PER_ETHER / 100))
    }

    pub fn with_balance(balance: Wei) -> Self {
        Self {
            address: DEV_ADDRESS,
            balance,
            sent: 0,
        }
    }

    pub fn balance(&self) -> Wei {
        self.balance
    }
}

impl Default for DevWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletBackend for DevWallet {
    async fn connect(&mut self) -> Result<WalletIdentity, WalletError> {
        Ok(WalletIdentity {
            address: self.address,
            backend: self.backend_name().to_string(),
        })
    }

    async fn send_value(
        &mut self,
        request: &TransferRequest,
    ) -> Result<TransactionHandle, WalletError> {
        if request.from != self.address {
            return Err(WalletError::TransferFailed(format!(
                "dev wallet does not own {}",
                request.from
            )));
        }
        if request.value > self.balance {
            return Err(WalletError::TransferFailed(format!(
                "insufficient funds: have {}, need {}",
                self.balance, request.value
            )));
        }
        self.balance = self.balance.saturating_sub(request.value);
        self.sent += 1;
        Ok(TransactionHandle {
            tx_hash: format!("0x{:064x}", self.sent),
        })
    }

    fn backend_name(&self) -> &str {
        "dev"
    }
}
