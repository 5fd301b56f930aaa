//! Mock wallet service: user → wallet → balance → purchase.
//!
//! Each lookup is a partial function. Chaining them with `>>` means an
//! unknown user never reaches the balance lookup.

use std::collections::HashMap;

use crate::control::Maybe;

/// The user that owns a wallet in the default directory.
pub const KNOWN_USER: u32 = 0xC001_D00D;

/// A user the default directory has never heard of.
pub const UNKNOWN_USER: u32 = 0x1BAD_D00D;

/// The wallet owned by [`KNOWN_USER`].
pub const KNOWN_WALLET: u32 = 0x6361_7368;

/// In-memory wallet records and the purchase fee.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::demo::wallet::{KNOWN_USER, UNKNOWN_USER, WalletDirectory};
///
/// let directory = WalletDirectory::default();
/// assert_eq!(directory.balance_after_purchase(KNOWN_USER), Maybe::present(118.45));
/// assert_eq!(directory.balance_after_purchase(UNKNOWN_USER), Maybe::absent());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WalletDirectory {
    wallets_by_user: HashMap<u32, u32>,
    balances_by_wallet: HashMap<u32, f64>,
    purchase_fee: f64,
}

impl Default for WalletDirectory {
    fn default() -> Self {
        Self::new(5.0)
            .with_wallet(KNOWN_USER, KNOWN_WALLET)
            .with_balance(KNOWN_WALLET, 123.45)
    }
}

impl WalletDirectory {
    /// Creates an empty directory charging `purchase_fee` per purchase.
    #[must_use]
    pub fn new(purchase_fee: f64) -> Self {
        Self {
            wallets_by_user: HashMap::new(),
            balances_by_wallet: HashMap::new(),
            purchase_fee,
        }
    }

    /// Registers `wallet_id` as the wallet of `user_id`.
    #[must_use]
    pub fn with_wallet(mut self, user_id: u32, wallet_id: u32) -> Self {
        self.wallets_by_user.insert(user_id, wallet_id);
        self
    }

    /// Sets the balance held in `wallet_id`.
    #[must_use]
    pub fn with_balance(mut self, wallet_id: u32, balance: f64) -> Self {
        self.balances_by_wallet.insert(wallet_id, balance);
        self
    }

    /// Returns the fee charged by [`WalletDirectory::withdraw`].
    pub const fn purchase_fee(&self) -> f64 {
        self.purchase_fee
    }

    /// Looks up the wallet owned by `user_id`.
    pub fn user_wallet_id(&self, user_id: u32) -> Maybe<u32> {
        let wallet_id = Maybe::from(self.wallets_by_user.get(&user_id).copied());
        tracing::debug!(user_id, found = wallet_id.is_present(), "wallet id lookup");
        wallet_id
    }

    /// Looks up the balance held in `wallet_id`.
    pub fn wallet_balance(&self, wallet_id: u32) -> Maybe<f64> {
        let balance = Maybe::from(self.balances_by_wallet.get(&wallet_id).copied());
        tracing::debug!(wallet_id, found = balance.is_present(), "wallet balance lookup");
        balance
    }

    /// Deducts the purchase fee, refusing when the result would be negative.
    pub fn withdraw(&self, balance: f64) -> Maybe<f64> {
        let remaining = balance - self.purchase_fee;
        if remaining < 0.0 {
            tracing::debug!(balance, fee = self.purchase_fee, "insufficient funds");
        }
        Maybe::when(remaining >= 0.0, remaining)
    }

    /// Runs the whole purchase chain for `user_id`.
    pub fn balance_after_purchase(&self, user_id: u32) -> Maybe<f64> {
        Maybe::present(user_id)
            >> (|user_id: u32| self.user_wallet_id(user_id))
            >> (|wallet_id: u32| self.wallet_balance(wallet_id))
            >> (|balance: f64| self.withdraw(balance))
    }
}
