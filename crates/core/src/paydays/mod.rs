//! UK pay-cycle and banking-day calendar.

mod paydays_model;
mod paydays_service;
mod uk_calendar;

pub use paydays_model::{PayPeriod, PaydayInfo};
pub use paydays_service::{PaydayService, PaydayServiceTrait};
pub use uk_calendar::{
    is_uk_bank_holiday, is_weekend, is_working_day, next_payday, next_working_day,
    pay_period_for, payday_for_month, previous_working_day, working_days_between,
};
