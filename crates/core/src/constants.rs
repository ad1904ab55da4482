//! Application-wide constants.

/// Default base currency for new installations.
pub const DEFAULT_BASE_CURRENCY: &str = "GBP";

/// Nominal day of the month wages are paid on, before working-day adjustment.
pub const DEFAULT_PAYDAY_DAY: u32 = 20;

/// Days either side of a bill due date a bank transaction may settle on.
pub const BILL_MATCH_DATE_TOLERANCE_DAYS: i64 = 4;

/// Bills due within this many days are reported as DUE rather than UPCOMING.
pub const BILL_DUE_SOON_DAYS: i64 = 3;

/// Hard ceiling on payoff simulations; plans longer than this are truncated.
pub const PAYOFF_MAX_MONTHS: usize = 600;

/// Items projected to run out within this many days need restocking.
pub const RESTOCK_HORIZON_DAYS: i64 = 14;

/// Settings keys stored in the app_settings table.
pub const SETTING_BASE_CURRENCY: &str = "base_currency";
pub const SETTING_PAYDAY_DAY: &str = "payday_day";
pub const SETTING_ONBOARDING_COMPLETED: &str = "onboarding_completed";
