use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use lifetracker_core::accounts::{
    Account, AccountRepositoryTrait, AccountUpdate, NewAccount,
};
use lifetracker_core::Result;

use super::model::{AccountDB, NewAccountDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::accounts;
use crate::schema::accounts::dsl::*;

pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AccountRepository { pool, writer }
    }
}

/// Clears the default flag on every account. Runs inside the caller's
/// write transaction so set-new-default stays atomic.
fn clear_default(conn: &mut SqliteConnection) -> Result<usize> {
    diesel::update(accounts.filter(is_default.eq(true)))
        .set(is_default.eq(false))
        .execute(conn)
        .into_core()
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                if new_account.is_default {
                    clear_default(conn)?;
                }
                let new_account_db =
                    NewAccountDB::from_domain(new_account, Utc::now().naive_utc());
                let result_db = diesel::insert_into(accounts::table)
                    .values(&new_account_db)
                    .returning(AccountDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Account::from(result_db))
            })
            .await
    }

    async fn update(&self, account_update: AccountUpdate) -> Result<Account> {
        let account_id = account_update.id.clone().unwrap_or_default();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                if account_update.is_default {
                    clear_default(conn)?;
                }
                diesel::update(accounts.find(&account_id))
                    .set((
                        name.eq(&account_update.name),
                        institution.eq(&account_update.institution),
                        account_type.eq(account_update.account_type.as_str()),
                        is_default.eq(account_update.is_default),
                        is_active.eq(account_update.is_active),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = accounts
                    .find(&account_id)
                    .first::<AccountDB>(conn)
                    .into_core()?;
                Ok(Account::from(result_db))
            })
            .await
    }

    async fn update_balance(&self, account_id: &str, new_balance: Decimal) -> Result<Account> {
        let account_id = account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                diesel::update(accounts.find(&account_id))
                    .set((
                        balance.eq(new_balance.to_string()),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = accounts
                    .find(&account_id)
                    .first::<AccountDB>(conn)
                    .into_core()?;
                Ok(Account::from(result_db))
            })
            .await
    }

    async fn delete(&self, account_id: &str) -> Result<usize> {
        let account_id = account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Transactions cascade via the FK.
                diesel::delete(accounts.find(&account_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;
        let result_db = accounts
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .into_core()?;
        Ok(Account::from(result_db))
    }

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = accounts.into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(is_active.eq(active));
        }
        let results = query
            .order(name.asc())
            .load::<AccountDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(Account::from).collect())
    }
}
