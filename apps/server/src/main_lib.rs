use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use lifetracker_core::{
    accounts::{AccountService, AccountServiceTrait},
    bills::{BillService, BillServiceTrait},
    deals::{DealService, DealServiceTrait},
    debts::{DebtService, DebtServiceTrait},
    groceries::{GroceryService, GroceryServiceTrait},
    investments::{InvestmentService, InvestmentServiceTrait},
    meals::{MealService, MealServiceTrait},
    paydays::{PaydayService, PaydayServiceTrait},
    settings::{SettingsService, SettingsServiceTrait},
    toiletries::{ToiletryService, ToiletryServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
};
use lifetracker_storage_sqlite::{
    accounts::AccountRepository,
    bills::BillRepository,
    db::{self, spawn_writer},
    deals::DealRepository,
    debts::DebtRepository,
    groceries::GroceryRepository,
    investments::InvestmentRepository,
    meals::MealRepository,
    settings::SettingsRepository,
    toiletries::ToiletryRepository,
    transactions::TransactionRepository,
};

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub bill_service: Arc<dyn BillServiceTrait>,
    pub debt_service: Arc<dyn DebtServiceTrait>,
    pub payday_service: Arc<dyn PaydayServiceTrait>,
    pub grocery_service: Arc<dyn GroceryServiceTrait>,
    pub meal_service: Arc<dyn MealServiceTrait>,
    pub toiletry_service: Arc<dyn ToiletryServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub deal_service: Arc<dyn DealServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("LT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let settings_repo = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));
    let settings_service = Arc::new(SettingsService::new(settings_repo));

    let account_repo = Arc::new(AccountRepository::new(pool.clone(), writer.clone()));
    let account_service = Arc::new(AccountService::new(account_repo.clone()));

    let transaction_repo = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let transaction_service = Arc::new(TransactionService::new(
        transaction_repo.clone(),
        account_repo.clone(),
    ));

    let bill_repo = Arc::new(BillRepository::new(pool.clone(), writer.clone()));
    let bill_service = Arc::new(BillService::new(bill_repo.clone(), transaction_repo.clone()));

    let debt_repo = Arc::new(DebtRepository::new(pool.clone(), writer.clone()));
    let debt_service = Arc::new(DebtService::new(debt_repo));

    let payday_service = Arc::new(PaydayService::new(settings_service.clone()));

    let grocery_repo = Arc::new(GroceryRepository::new(pool.clone(), writer.clone()));
    let grocery_service = Arc::new(GroceryService::new(grocery_repo));

    let meal_repo = Arc::new(MealRepository::new(pool.clone(), writer.clone()));
    let meal_service = Arc::new(MealService::new(meal_repo));

    let toiletry_repo = Arc::new(ToiletryRepository::new(pool.clone(), writer.clone()));
    let toiletry_service = Arc::new(ToiletryService::new(toiletry_repo));

    let investment_repo = Arc::new(InvestmentRepository::new(pool.clone(), writer.clone()));
    let investment_service = Arc::new(InvestmentService::new(investment_repo));

    let deal_repo = Arc::new(DealRepository::new(pool.clone(), writer.clone()));
    let deal_service = Arc::new(DealService::new(deal_repo, bill_repo.clone()));

    Ok(Arc::new(AppState {
        account_service,
        transaction_service,
        bill_service,
        debt_service,
        payday_service,
        grocery_service,
        meal_service,
        toiletry_service,
        investment_service,
        deal_service,
        settings_service,
        db_path,
    }))
}
