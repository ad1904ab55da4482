//! Round-trip tests for the SQLite repositories against a scratch database.

use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use lifetracker_core::accounts::{AccountRepositoryTrait, AccountType, NewAccount};
use lifetracker_core::settings::SettingsRepositoryTrait;
use lifetracker_core::transactions::{NewTransaction, TransactionQuery, TransactionRepositoryTrait};
use lifetracker_storage_sqlite::accounts::AccountRepository;
use lifetracker_storage_sqlite::db::{self, spawn_writer};
use lifetracker_storage_sqlite::settings::SettingsRepository;
use lifetracker_storage_sqlite::transactions::TransactionRepository;

struct TestDb {
    pool: Arc<db::DbPool>,
    writer: db::WriteHandle,
    // Held so the scratch directory outlives the test.
    _dir: TempDir,
}

fn setup() -> TestDb {
    let dir = TempDir::new().expect("create temp dir");
    // Each test gets its own scratch file; DATABASE_URL would override it.
    std::env::remove_var("DATABASE_URL");

    let resolved = db::init(dir.path().to_string_lossy().as_ref()).expect("init db");
    let pool = db::create_pool(&resolved).expect("create pool");
    db::run_migrations(&pool).expect("run migrations");
    let writer = spawn_writer((*pool).clone());

    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

fn new_account(name: &str, is_default: bool) -> NewAccount {
    NewAccount {
        id: None,
        name: name.to_string(),
        institution: Some("Monzo".to_string()),
        account_type: AccountType::Current,
        currency: "GBP".to_string(),
        balance: dec!(100.50),
        is_default,
        is_active: true,
    }
}

#[tokio::test]
async fn test_account_create_and_fetch() {
    let db = setup();
    let repo = AccountRepository::new(db.pool.clone(), db.writer.clone());

    let created = repo.create(new_account("Joint", false)).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.balance, dec!(100.50));

    let fetched = repo.get_by_id(&created.id).unwrap();
    assert_eq!(fetched.name, "Joint");
    assert_eq!(fetched.account_type, AccountType::Current);
}

#[tokio::test]
async fn test_only_one_default_account() {
    let db = setup();
    let repo = AccountRepository::new(db.pool.clone(), db.writer.clone());

    let first = repo.create(new_account("First", true)).await.unwrap();
    let second = repo.create(new_account("Second", true)).await.unwrap();

    let first_after = repo.get_by_id(&first.id).unwrap();
    let second_after = repo.get_by_id(&second.id).unwrap();
    assert!(!first_after.is_default);
    assert!(second_after.is_default);
}

#[tokio::test]
async fn test_import_dedup_across_runs() {
    let db = setup();
    let accounts = AccountRepository::new(db.pool.clone(), db.writer.clone());
    let transactions = TransactionRepository::new(db.pool.clone(), db.writer.clone());

    let account = accounts.create(new_account("Main", false)).await.unwrap();
    let row = NewTransaction {
        id: None,
        account_id: account.id.clone(),
        transaction_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        description: "TESCO STORES".to_string(),
        merchant: None,
        amount: dec!(-23.50),
        category: None,
        notes: None,
        import_id: Some("import-key-1".to_string()),
    };

    let (inserted, duplicates) = transactions
        .create_many_deduped(vec![row.clone()])
        .await
        .unwrap();
    assert_eq!((inserted, duplicates), (1, 0));

    // Re-importing the same statement row is a no-op.
    let (inserted, duplicates) = transactions
        .create_many_deduped(vec![row])
        .await
        .unwrap();
    assert_eq!((inserted, duplicates), (0, 1));

    let found = transactions
        .search(&TransactionQuery {
            account_id: Some(account.id),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_settings_upsert() {
    let db = setup();
    let repo = SettingsRepository::new(db.pool.clone(), db.writer.clone());

    assert!(repo.get_setting("base_currency").unwrap().is_none());

    repo.set_setting("base_currency", "GBP").await.unwrap();
    repo.set_setting("base_currency", "EUR").await.unwrap();
    assert_eq!(
        repo.get_setting("base_currency").unwrap().as_deref(),
        Some("EUR")
    );
}
