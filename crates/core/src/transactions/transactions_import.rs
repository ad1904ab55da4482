//! Bank-export CSV parsing.
//!
//! Accepts the common `date,description,amount[,merchant][,category]` layout
//! produced by UK bank exports. Rows that fail to parse are collected as
//! row-numbered errors rather than aborting the whole file, and every parsed
//! row carries a deterministic import id so re-importing the same statement
//! is a no-op.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::str::FromStr;
use thiserror::Error;

use super::transactions_model::NewTransaction;

/// Errors raised while reading a CSV statement.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV file is empty")]
    EmptyFile,

    #[error("CSV read failed: {0}")]
    Csv(String),

    #[error("No rows could be parsed ({0} rows failed)")]
    NothingParsed(usize),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Csv(err.to_string())
    }
}

/// A single row that failed to parse, with its 1-based line number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

/// A successfully parsed statement row, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRow {
    pub transaction_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub merchant: Option<String>,
    pub category: Option<String>,
    pub import_id: String,
}

/// Outcome of an import run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported: usize,
    pub duplicates: usize,
    pub errors: Vec<RowError>,
}

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d %b %Y"];

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Parses a statement amount, tolerating currency symbols, thousands
/// separators, and surrounding whitespace.
fn parse_amount(value: &str) -> Option<Decimal> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '£' | '$' | '€' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Deterministic dedup key over the fields that identify a statement row.
pub fn import_id(account_id: &str, date: NaiveDate, description: &str, amount: Decimal) -> String {
    let mut hasher = Sha256::new();
    hasher.update(account_id.as_bytes());
    hasher.update(date.format("%Y-%m-%d").to_string().as_bytes());
    hasher.update(description.trim().to_lowercase().as_bytes());
    hasher.update(amount.normalize().to_string().as_bytes());
    hex::encode(hasher.finalize())
}

fn looks_like_header(fields: &[&str]) -> bool {
    fields
        .first()
        .map(|f| parse_date(f).is_none())
        .unwrap_or(false)
}

/// Parses CSV content into import rows.
///
/// Duplicate rows within the file (same import id) are collapsed, keeping the
/// first occurrence. Returns the parsed rows plus per-row errors; fails only
/// when the file is empty or nothing at all parsed.
pub fn parse_bank_csv(
    account_id: &str,
    content: &str,
) -> std::result::Result<(Vec<ImportRow>, Vec<RowError>), ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows: Vec<ImportRow> = Vec::new();
    let mut errors: Vec<RowError> = Vec::new();
    let mut seen_ids: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut any_record = false;

    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                errors.push(RowError {
                    row: line,
                    message: e.to_string(),
                });
                continue;
            }
        };
        let fields: Vec<&str> = record.iter().collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        any_record = true;

        // The first non-empty record may be a header line.
        if index == 0 && looks_like_header(&fields) {
            continue;
        }

        if fields.len() < 3 {
            errors.push(RowError {
                row: line,
                message: format!("Expected at least 3 columns, got {}", fields.len()),
            });
            continue;
        }

        let Some(date) = parse_date(fields[0]) else {
            errors.push(RowError {
                row: line,
                message: format!("Unrecognized date '{}'", fields[0]),
            });
            continue;
        };
        let description = fields[1].trim();
        if description.is_empty() {
            errors.push(RowError {
                row: line,
                message: "Description is empty".to_string(),
            });
            continue;
        }
        let Some(amount) = parse_amount(fields[2]) else {
            errors.push(RowError {
                row: line,
                message: format!("Unrecognized amount '{}'", fields[2]),
            });
            continue;
        };

        let merchant = fields.get(3).map(|s| s.trim()).filter(|s| !s.is_empty());
        let category = fields.get(4).map(|s| s.trim()).filter(|s| !s.is_empty());

        let id = import_id(account_id, date, description, amount);
        if !seen_ids.insert(id.clone()) {
            continue;
        }

        rows.push(ImportRow {
            transaction_date: date,
            description: description.to_string(),
            amount,
            merchant: merchant.map(str::to_string),
            category: category.map(str::to_string),
            import_id: id,
        });
    }

    if !any_record {
        return Err(ImportError::EmptyFile);
    }
    if rows.is_empty() {
        return Err(ImportError::NothingParsed(errors.len()));
    }
    Ok((rows, errors))
}

impl ImportRow {
    /// Converts a parsed row into a persistable transaction.
    pub fn into_new_transaction(self, account_id: &str) -> NewTransaction {
        NewTransaction {
            id: None,
            account_id: account_id.to_string(),
            transaction_date: self.transaction_date,
            description: self.description,
            merchant: self.merchant,
            amount: self.amount,
            category: self.category,
            notes: None,
            import_id: Some(self.import_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const ACCOUNT: &str = "acc-1";

    #[test]
    fn test_parses_headerless_rows() {
        let csv = "2025-03-01,TESCO STORES,-23.50\n2025-03-02,SALARY,1800.00\n";
        let (rows, errors) = parse_bank_csv(ACCOUNT, csv).unwrap();
        assert!(errors.is_empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "TESCO STORES");
        assert_eq!(rows[0].amount, dec!(-23.50));
        assert_eq!(rows[1].amount, dec!(1800.00));
    }

    #[test]
    fn test_skips_header_and_parses_extras() {
        let csv = "Date,Description,Amount,Merchant,Category\n\
                   01/03/2025,NETFLIX.COM,-£10.99,Netflix,Entertainment\n";
        let (rows, errors) = parse_bank_csv(ACCOUNT, csv).unwrap();
        assert!(errors.is_empty());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, dec!(-10.99));
        assert_eq!(rows[0].merchant.as_deref(), Some("Netflix"));
        assert_eq!(rows[0].category.as_deref(), Some("Entertainment"));
    }

    #[test]
    fn test_thousands_separators() {
        let csv = "2025-03-28,BONUS,\"1,250.00\"\n";
        let (rows, _) = parse_bank_csv(ACCOUNT, csv).unwrap();
        assert_eq!(rows[0].amount, dec!(1250.00));
    }

    #[test]
    fn test_bad_rows_reported_not_fatal() {
        let csv = "2025-03-01,COFFEE,-3.20\nnot-a-date,JUNK,-1.00\n2025-03-02,,5.00\n";
        let (rows, errors) = parse_bank_csv(ACCOUNT, csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].row, 2);
        assert_eq!(errors[1].row, 3);
    }

    #[test]
    fn test_in_file_duplicates_collapse() {
        let csv = "2025-03-01,TESCO STORES,-23.50\n2025-03-01,TESCO STORES,-23.50\n";
        let (rows, errors) = parse_bank_csv(ACCOUNT, csv).unwrap();
        assert!(errors.is_empty());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_import_id_is_stable_and_scoped_to_account() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let a = import_id("acc-1", date, "Tesco Stores", dec!(-23.50));
        let b = import_id("acc-1", date, "  tesco stores ", dec!(-23.500));
        let c = import_id("acc-2", date, "Tesco Stores", dec!(-23.50));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_and_unparseable_files() {
        assert!(matches!(
            parse_bank_csv(ACCOUNT, ""),
            Err(ImportError::EmptyFile)
        ));
        assert!(matches!(
            parse_bank_csv(ACCOUNT, "garbage;;;\n"),
            Err(ImportError::EmptyFile) | Err(ImportError::NothingParsed(_))
        ));
    }
}
