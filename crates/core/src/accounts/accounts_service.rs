use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accounts_model::{Account, AccountUpdate, CurrencyTotal, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;

/// Service for managing accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance.
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!(
            "Creating account '{}' ({})",
            new_account.name, new_account.currency
        );
        self.repository.create(new_account).await
    }

    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;
        self.repository.update(account_update).await
    }

    async fn update_balance(&self, account_id: &str, balance: Decimal) -> Result<Account> {
        self.repository.update_balance(account_id, balance).await
    }

    async fn delete_account(&self, account_id: &str) -> Result<()> {
        self.repository.delete(account_id).await?;
        Ok(())
    }

    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    fn list_accounts(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>> {
        self.repository.list(is_active_filter)
    }

    fn get_active_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list(Some(true))
    }

    fn balances_by_currency(&self) -> Result<Vec<CurrencyTotal>> {
        let accounts = self.get_active_accounts()?;
        let mut totals: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();
        for account in &accounts {
            let entry = totals
                .entry(account.currency.clone())
                .or_insert((Decimal::ZERO, 0));
            entry.0 += account.balance;
            entry.1 += 1;
        }
        Ok(totals
            .into_iter()
            .map(|(currency, (total, account_count))| CurrencyTotal {
                currency,
                total,
                account_count,
            })
            .collect())
    }
}
