//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accounts_model::{Account, AccountUpdate, CurrencyTotal, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations of this trait handle the persistence of account data.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account. When the account is flagged as default, the
    /// implementation clears the previous default in the same transaction.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Updates an existing account.
    async fn update(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Sets an account's balance directly.
    async fn update_balance(&self, account_id: &str, balance: Decimal) -> Result<Account>;

    /// Deletes an account and its transactions by ID.
    ///
    /// Returns the number of deleted account records.
    async fn delete(&self, account_id: &str) -> Result<usize>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists accounts, optionally filtered by active status.
    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Updates an existing account with business validation.
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Sets an account's balance to a manually corrected figure.
    async fn update_balance(&self, account_id: &str, balance: Decimal) -> Result<Account>;

    /// Deletes an account and its transactions.
    async fn delete_account(&self, account_id: &str) -> Result<()>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists accounts with an optional active-status filter.
    fn list_accounts(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>>;

    /// Gets only active accounts.
    fn get_active_accounts(&self) -> Result<Vec<Account>>;

    /// Totals active-account balances grouped by currency.
    fn balances_by_currency(&self) -> Result<Vec<CurrencyTotal>>;
}
