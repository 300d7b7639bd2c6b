//! Wallet capability interface.
//!
//! One trait, one discovery list. A provider either detects its wallet
//! source or it doesn't; the first one that does gets to connect. This
//! replaces ad hoc probing of every possible wallet surface with a fixed,
//! ordered registry.

pub mod address;

use tracing::{debug, info};

pub use address::is_valid_cash_address;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("no wallet detected")]
    NotDetected,
    #[error("wallet returned an invalid address: {0}")]
    InvalidAddress(String),
    #[error("wallet source unavailable: {0}")]
    Unavailable(String),
}

/// A single way of reaching a wallet: can it be detected, and if so, what
/// address does it connect as.
pub trait WalletProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn detect(&self) -> bool;
    fn connect(&self) -> Result<String, WalletError>;
}

/// First provider in the list whose `detect()` succeeds.
pub fn discover<'a>(providers: &'a [Box<dyn WalletProvider>]) -> Option<&'a dyn WalletProvider> {
    for provider in providers {
        if provider.detect() {
            debug!("wallet provider detected: {}", provider.name());
            return Some(provider.as_ref());
        }
        debug!("wallet provider not present: {}", provider.name());
    }
    None
}

/// Discover and connect in one step, enforcing the address format on the way
/// out.
pub fn connect_first(providers: &[Box<dyn WalletProvider>]) -> Result<String, WalletError> {
    let provider = discover(providers).ok_or(WalletError::NotDetected)?;
    let address = provider.connect()?;
    if !is_valid_cash_address(&address) {
        return Err(WalletError::InvalidAddress(address));
    }
    info!("wallet connected via {}", provider.name());
    Ok(address)
}

/// Wallet address supplied through an environment variable. The headless
/// counterpart of a browser extension: present when the variable is set.
pub struct EnvWallet {
    var: String,
}

impl EnvWallet {
    pub const DEFAULT_VAR: &'static str = "EMOCHAIN_WALLET_ADDRESS";

    pub fn new() -> Self {
        Self::from_var(Self::DEFAULT_VAR)
    }

    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletProvider for EnvWallet {
    fn name(&self) -> &'static str {
        "env"
    }

    fn detect(&self) -> bool {
        std::env::var(&self.var).map(|v| !v.is_empty()).unwrap_or(false)
    }

    fn connect(&self) -> Result<String, WalletError> {
        std::env::var(&self.var).map_err(|_| WalletError::Unavailable(self.var.clone()))
    }
}

/// Fixed-address provider for demos and tests.
pub struct StaticWallet {
    address: String,
}

impl StaticWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into() }
    }
}

impl WalletProvider for StaticWallet {
    fn name(&self) -> &'static str {
        "static"
    }

    fn detect(&self) -> bool {
        true
    }

    fn connect(&self) -> Result<String, WalletError> {
        Ok(self.address.clone())
    }
}
